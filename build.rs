fn main() {
    println!("cargo:rerun-if-env-changed=DESKSHELL_APP_VERSION");

    // The update baseline is baked in at build time. Release pipelines may
    // override it; otherwise the package version is used.
    let version = std::env::var("DESKSHELL_APP_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| std::env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=DESKSHELL_APP_VERSION={}", version);
}
