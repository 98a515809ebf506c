//! Process-wide tracing setup shared by the binaries.
//!
//! `RUST_LOG` filters (default `info`). With `MM_LOG_DIR` set, output goes to
//! a daily-rolled `<dir>/<app>.log`; otherwise to stderr, leaving stdout for
//! command output.

use std::{
    panic,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

pub const ENV_LOG_DIR: &str = "MM_LOG_DIR";
pub const ENV_LOG_INCLUDE_BACKTRACE: &str = "MM_LOG_INCLUDE_BACKTRACE";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: Option<PathBuf>,
    /// Also run the default panic hook (prints the backtrace when enabled).
    pub include_backtrace: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = lookup(ENV_LOG_DIR)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let include_backtrace = lookup(ENV_LOG_INCLUDE_BACKTRACE)
            .map(|value| value.trim() == "1" || value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            log_dir,
            include_backtrace,
        }
    }
}

/// Install the subscriber and the panic hook. Calling it again is harmless.
pub fn init_tracing(app_name: &'static str, config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let writer = config
        .log_dir
        .as_ref()
        .and_then(|dir| daily_file_writer(dir, app_name))
        .unwrap_or_else(|| BoxMakeWriter::new(std::io::stderr));
    let _ = builder.with_writer(writer).try_init();

    install_panic_hook(app_name, config.include_backtrace);
}

fn daily_file_writer(dir: &Path, app_name: &str) -> Option<BoxMakeWriter> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("{app_name}: cannot create log dir {}: {err}; logging to stderr", dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // Only the first guard is kept; later inits fail in try_init anyway.
    let _ = FILE_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

fn install_panic_hook(app_name: &'static str, include_backtrace: bool) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(app = app_name, %location, %message, "panic");

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}
