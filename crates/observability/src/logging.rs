//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable:
//! - `AEC_LOG_LEVEL`: Log-Level oder Filter-Direktive, Standard: info
//! - `AEC_LOG_FORMAT`: Format (text/json), Standard: text
//!
//! Umgebungsvariablen haben Vorrang vor den uebergebenen Werten.

use tracing_subscriber::{fmt, EnvFilter};

const ENV_LEVEL: &str = "AEC_LOG_LEVEL";
const ENV_FORMAT: &str = "AEC_LOG_FORMAT";

/// Initialisiert das Logging-System.
///
/// Gibt `false` zurueck wenn bereits ein globaler Subscriber gesetzt ist,
/// z.B. weil der Host selbst Logging eingerichtet hat.
pub fn logging_initialisieren(level: &str, format: &str) -> bool {
    let filter = EnvFilter::try_from_env(ENV_LEVEL)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format_env = std::env::var(ENV_FORMAT).unwrap_or_else(|_| format.to_string());

    let ergebnis = match format_env.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt().with_env_filter(filter).with_target(true).try_init(),
    };
    ergebnis.is_ok()
}

/// Validiert ob ein Log-Level-String gueltig ist.
/// Filter-Direktiven sind nur per `AEC_LOG_LEVEL` moeglich.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}
