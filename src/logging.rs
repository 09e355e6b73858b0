use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var holding a log file path.
pub const LOG_ENV_VAR: &str = "SHOPPING_LIST_LOG";

/// Pick the log file: CLI flag, then `SHOPPING_LIST_LOG`, then config.
pub fn resolve_log_path(
    cli: Option<&Path>,
    env: Option<&str>,
    config: &LoggingConfig,
) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| config.file.clone())
}

/// Initialize tracing with file output.
///
/// Logging is disabled unless a log file is configured, since anything
/// written to stdout/stderr would corrupt the TUI.
///
/// Log files get a `{path}.{timestamp}.{pid}` name so that concurrent
/// instances never share a file. Returns the path actually written to.
pub fn init_tracing(cli_path: Option<&Path>, config: &LoggingConfig) -> Option<PathBuf> {
    let env_path = std::env::var(LOG_ENV_VAR).ok();
    let log_path = resolve_log_path(cli_path, env_path.as_deref(), config)?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = PathBuf::from(format!("{}.{}.{}", log_path.display(), timestamp, pid));

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_file(file: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            file: file.map(PathBuf::from),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn no_source_disables_logging() {
        assert_eq!(resolve_log_path(None, None, &config_with_file(None)), None);
    }

    #[test]
    fn cli_flag_wins() {
        let path = resolve_log_path(
            Some(Path::new("/tmp/cli.log")),
            Some("/tmp/env.log"),
            &config_with_file(Some("/tmp/config.log")),
        );
        assert_eq!(path, Some(PathBuf::from("/tmp/cli.log")));
    }

    #[test]
    fn env_beats_config() {
        let path = resolve_log_path(
            None,
            Some("/tmp/env.log"),
            &config_with_file(Some("/tmp/config.log")),
        );
        assert_eq!(path, Some(PathBuf::from("/tmp/env.log")));
    }

    #[test]
    fn empty_env_falls_through_to_config() {
        let path = resolve_log_path(None, Some(""), &config_with_file(Some("/tmp/config.log")));
        assert_eq!(path, Some(PathBuf::from("/tmp/config.log")));
    }
}
