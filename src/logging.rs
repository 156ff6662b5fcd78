use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "POSTCRAFT_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `POSTCRAFT_LOG` names a file: the terminal
/// belongs to the TUI. The filter comes from `RUST_LOG` (default `info`).
///
/// Each run writes to `{path}.{timestamp}.{pid}` so that concurrent
/// instances never share a file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
