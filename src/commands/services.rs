//! Service factory for building the application from configuration.

use anyhow::Result;

use crate::{
    app::App,
    http::{HttpClient, build_http_client},
    install::PlatformInstaller,
    platform::PlatformDetector,
    print::PlatformPrinter,
    release::{FeedKind, PlatformAssetPicker, ReleaseFeed},
    runtime::Runtime,
    updater::Updater,
};

use super::config::Config;

/// Build the release feed selected by the configuration
pub fn build_feed(config: &Config, http: HttpClient) -> ReleaseFeed {
    match (config.feed, &config.manifest_url) {
        (FeedKind::Manifest, Some(url)) => ReleaseFeed::manifest(http, url.clone()),
        _ => ReleaseFeed::github(http, &config.api_url, &config.repo),
    }
}

/// Wire the bound operations together. The platform is detected once here
/// and every platform-specific strategy is fixed from it.
pub fn build_app<R: Runtime + 'static>(
    runtime: R,
    config: &Config,
    detector: &dyn PlatformDetector,
) -> Result<App<R, ReleaseFeed>> {
    let http = build_http_client(config.token.as_deref())?;
    let platform = detector.detect();

    let updater = Updater::new(
        build_feed(config, http.clone()),
        http,
        Box::new(PlatformAssetPicker::with_platform(platform.clone())),
        PlatformInstaller::for_platform(&platform),
        config.current_version.clone(),
    );

    Ok(App::new(
        runtime,
        updater,
        PlatformPrinter::for_platform(&platform),
        config.auto_check_delay,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::ConfigOverrides;
    use crate::platform::Platform;
    use crate::release::FetchRelease;
    use crate::runtime::MockRuntime;
    use reqwest::Client;

    struct Fixed(Platform);

    impl PlatformDetector for Fixed {
        fn detect(&self) -> Platform {
            self.0.clone()
        }
    }

    fn config(overrides: ConfigOverrides) -> Config {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_env_var()
            .returning(|_| Err(std::env::VarError::NotPresent));
        Config::load(&runtime, overrides).unwrap()
    }

    #[test]
    fn test_build_feed_github() {
        let config = config(ConfigOverrides {
            repo: Some("acme/desk".into()),
            api_url: Some("http://127.0.0.1:1234".into()),
            ..Default::default()
        });
        let feed = build_feed(&config, HttpClient::new(Client::new()));

        assert_eq!(feed.kind(), FeedKind::Github);
        assert_eq!(
            feed.url(),
            "http://127.0.0.1:1234/repos/acme/desk/releases/latest"
        );
    }

    #[test]
    fn test_build_feed_manifest() {
        let config = config(ConfigOverrides {
            feed: Some(FeedKind::Manifest),
            manifest_url: Some("https://example.com/latest.json".into()),
            ..Default::default()
        });
        let feed = build_feed(&config, HttpClient::new(Client::new()));

        assert_eq!(feed.kind(), FeedKind::Manifest);
        assert_eq!(feed.url(), "https://example.com/latest.json");
    }

    #[tokio::test]
    async fn test_build_app_uses_detected_platform() {
        let config = config(ConfigOverrides::default());
        // No expectations: an unsupported platform must not touch the runtime
        let app = build_app(
            MockRuntime::new(),
            &config,
            &Fixed(Platform::Other("haiku".into())),
        )
        .unwrap();

        assert_eq!(app.get_app_version(), crate::APP_VERSION);
        let err = app
            .print_silent(std::path::Path::new("/tmp/doc.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported operating system: haiku");
    }
}
