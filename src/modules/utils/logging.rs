use std::ffi::OsString;

use env_logger::{Builder, Target, WriteStyle};
use lazy_static::lazy_static;
use log::{info, log, Level, LevelFilter};

/// Environment variable holding the `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "PAM_CLEAR_TOKEN_LOG";

lazy_static! {
    static ref LOGGER_INSTALLED: bool = install_logger();
}

/// Initialize logging once per process.
///
/// Nothing is installed unless `PAM_CLEAR_TOKEN_LOG` is set, and a logger the host
/// already installed is left alone. Returns whether this module installed one.
pub fn initialize_logging() -> bool {
    *LOGGER_INSTALLED
}

fn install_logger() -> bool {
    let mut builder = match logger_builder(std::env::var_os(LOG_ENV)) {
        Some(builder) => builder,
        None => return false,
    };

    let installed = builder.target(Target::Stderr).try_init().is_ok();
    if installed {
        info!("Logging system initialized");
    }
    installed
}

/// Builder for the value of `PAM_CLEAR_TOKEN_LOG`, or `None` when it is unset.
fn logger_builder(filter: Option<OsString>) -> Option<Builder> {
    let filter = filter?;

    let mut builder = Builder::new();
    builder
        // Off unless the directives say otherwise
        .filter_level(LevelFilter::Off)
        .parse_filters(&filter.to_string_lossy())
        .format_timestamp_secs()
        .format_module_path(true)
        // The host owns the terminal
        .write_style(WriteStyle::Never);
    Some(builder)
}

/// Level and message for a PAM stage outcome.
fn pam_event(operation: &str, success: bool, details: Option<&str>) -> (Level, String) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let level = if success { Level::Info } else { Level::Warn };
    let message = format!(
        "PAM event: op={}, success={}, timestamp={}, details={:?}",
        operation, success, timestamp, details
    );
    (level, message)
}

/// Structured logging for PAM stage outcomes. Credential contents never go through here.
pub fn log_pam_event(operation: &str, success: bool, details: Option<&str>) {
    let (level, message) = pam_event(operation, success, details);
    log!(level, "{}", message);
}
