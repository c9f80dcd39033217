//! Logging setup for the pagemood binary.
//!
//! Stdout is reserved for pipeline output (extracted text, wiki links, the
//! sentiment line), so `tracing` events go to a daily-rolling file and only
//! reach stderr when verbose mode is on. Call [`init_logging`] once near
//! process start; later calls are no-ops that return the resolved log path.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "pagemood";

/// Overrides the log directory; explicit [`LogConfig::log_dir`] still wins.
pub const LOG_DIR_ENV: &str = "PAGEMOOD_LOG_DIR";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Options for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Explicit log directory. If `None`, `PAGEMOOD_LOG_DIR` is consulted,
    /// then `~/.local/share/pagemood`.
    pub log_dir: Option<PathBuf>,
    /// Mirror events to stderr in addition to the file sink.
    pub verbose: bool,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            verbose: false,
            default_filter: "info",
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the log file path for the current day.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = resolve_log_dir(config.log_dir.as_deref());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let appender = rolling::daily(&dir, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));
    let stderr_layer = config.verbose.then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    // `rolling::daily` suffixes the prefix with the date.
    let today = Local::now().format("%Y-%m-%d");
    let path = dir.join(format!("{APP_NAME}.log.{today}"));
    let _ = LOG_PATH.set(path.clone());
    Ok(path)
}

fn resolve_log_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_home(dir);
    }

    if let Ok(env_dir) = std::env::var(LOG_DIR_ENV) {
        return expand_home(Path::new(&env_dir));
    }

    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_NAME)
    } else {
        PathBuf::from(".").join(APP_NAME)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins_over_env_var() {
        temp_env::with_var(LOG_DIR_ENV, Some("/env/logs"), || {
            assert_eq!(
                resolve_log_dir(Some(Path::new("/explicit/logs"))),
                PathBuf::from("/explicit/logs")
            );
            assert_eq!(resolve_log_dir(None), PathBuf::from("/env/logs"));
        });
    }

    #[test]
    fn falls_back_to_local_share() {
        temp_env::with_vars(
            [(LOG_DIR_ENV, None::<&str>), ("HOME", Some("/home/u"))],
            || {
                assert_eq!(
                    resolve_log_dir(None),
                    PathBuf::from("/home/u/.local/share/pagemood")
                );
            },
        );
    }

    #[test]
    fn tilde_paths_resolve_against_home() {
        temp_env::with_var("HOME", Some("/home/u"), || {
            assert_eq!(expand_home(Path::new("~/logs")), PathBuf::from("/home/u/logs"));
            assert_eq!(expand_home(Path::new("/abs/logs")), PathBuf::from("/abs/logs"));
        });
    }
}
