//! CLI arguments, credential resolution, and logging setup

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// skycast - terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Search for a city and watch its weather from the terminal")]
pub struct Args {
    /// City to resolve before the dashboard opens (first geocoding match)
    #[arg(long, short)]
    pub city: Option<String>,

    /// Weather auto-refresh interval in seconds (0 disables)
    #[arg(long, default_value = "300")]
    pub refresh_interval: u64,

    /// OpenWeatherMap API key; falls back to $OPENWEATHER_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    /// Append tracing output to this file (stdout belongs to the TUI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Resolve the API credential: the CLI flag wins, then the environment.
///
/// The key is configuration, never a source literal.
pub fn resolve_api_key(
    cli: Option<String>,
    env: Option<String>,
) -> Result<String, String> {
    cli.or(env)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "no API key configured; pass --api-key or set {}",
                API_KEY_ENV
            )
        })
}

/// Install a file-backed tracing subscriber.
///
/// Filter comes from `RUST_LOG` when set, otherwise logs skycast at debug.
pub fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skycast=debug,skycast_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flag_wins() {
        let key = resolve_api_key(Some("from-cli".into()), Some("from-env".into()));
        assert_eq!(key.as_deref(), Ok("from-cli"));
    }

    #[test]
    fn test_env_fallback() {
        let key = resolve_api_key(None, Some("from-env".into()));
        assert_eq!(key.as_deref(), Ok("from-env"));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = resolve_api_key(None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(API_KEY_ENV));
    }

    #[test]
    fn test_blank_key_is_an_error() {
        assert!(resolve_api_key(Some("  ".into()), None).is_err());
        assert!(resolve_api_key(None, Some(String::new())).is_err());
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["skycast"]);
        assert_eq!(args.refresh_interval, 300);
        assert!(args.city.is_none());
        assert!(args.api_key.is_none());
    }

    #[test]
    fn test_args_parse_city() {
        let args = Args::parse_from(["skycast", "--city", "London", "--refresh-interval", "60"]);
        assert_eq!(args.city.as_deref(), Some("London"));
        assert_eq!(args.refresh_interval, 60);
    }
}
