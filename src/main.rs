use anyhow::Result;
use clap::Parser;
use deskshell::commands::{self, ConfigOverrides};
use deskshell::release::FeedKind;
use std::path::PathBuf;
use std::time::Duration;

/// deskshell - desktop shell backend
///
/// Checks for, downloads and installs application updates, and prints
/// documents silently through the platform's print facility.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication against the GitHub API.
///
/// Examples:
///   deskshell check                        # Check the latest GitHub release
///   deskshell download <URL> ./update.exe  # Download an update
///   deskshell serve                        # Run the stdio bridge for a frontend
#[derive(Parser, Debug)]
#[command(author, version = deskshell::APP_VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub repository publishing releases, as "owner/repo"
    #[arg(long, env = "DESKSHELL_REPO", value_name = "OWNER/REPO", global = true)]
    pub repo: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "DESKSHELL_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Release feed format
    #[arg(long, env = "DESKSHELL_FEED", value_enum, global = true)]
    pub feed: Option<FeedKind>,

    /// URL of the latest.json manifest (manifest feed only)
    #[arg(
        long = "manifest-url",
        env = "DESKSHELL_MANIFEST_URL",
        value_name = "URL",
        global = true
    )]
    pub manifest_url: Option<String>,

    /// Seconds to wait after startup before the background update check
    #[arg(
        long = "auto-check-delay",
        env = "DESKSHELL_AUTO_CHECK_DELAY",
        value_name = "SECONDS",
        global = true
    )]
    pub auto_check_delay: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check whether a newer release is published
    Check,

    /// Download an update file
    Download(DownloadArgs),

    /// Launch a downloaded installer
    Install(PathArgs),

    /// Print a document without showing a dialog
    Print(PathArgs),

    /// Show the application version used as the update baseline
    Version,

    /// Serve bound operations as line-delimited JSON over stdin/stdout
    Serve,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Download URL, usually the `download_url` reported by `check`
    #[arg(value_name = "URL")]
    pub url: String,

    /// Destination file (defaults to the download directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo: self.repo.clone(),
            api_url: self.api_url.clone(),
            feed: self.feed,
            manifest_url: self.manifest_url.clone(),
            auto_check_delay: self.auto_check_delay.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = deskshell::runtime::RealRuntime;
    let overrides = cli.overrides();

    match cli.command {
        Commands::Check => commands::check(runtime, overrides).await?,
        Commands::Download(args) => {
            commands::download(runtime, &args.url, args.path, overrides).await?
        }
        Commands::Install(args) => commands::install(runtime, &args.path, overrides)?,
        Commands::Print(args) => commands::print(runtime, &args.path, overrides).await?,
        Commands::Version => commands::version(),
        Commands::Serve => commands::serve(runtime, overrides).await?,
    }
    Ok(())
}
