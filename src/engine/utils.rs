use std::path::PathBuf;

use dirs::config_dir;
use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::RenamerError;

/// Logs go to stderr so stdout stays a clean list of names.
pub fn init_tracing(verbosity: u8) {
    // RUST_LOG wins over -v, e.g. RUST_LOG="autorename=trace"
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::LocalTime::rfc_3339())
        .compact()
        .init();
}

pub fn default_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("autorename");
    path.push("config.json");

    path
}

pub fn humanize(e: &RenamerError) -> String {
    match e {
        RenamerError::MissingConfig(path) => {
            format!("No config file at {}", path.display())
        }
        RenamerError::Json { path, source } => {
            format!("JSON error in {}: {}", path.display(), source)
        }
        RenamerError::InvalidFormat(format) => {
            format!("Numeric format `{}` needs a %d placeholder, e.g. \"(%d)\"", format)
        }
        other => other.to_string(),
    }
}
