//! aec-control – Steuerung der plattformseitigen Echo-Cancellation
//!
//! Verwaltet genau einen AEC-Effekt der Plattform, gebunden an eine
//! Audio-Session des Hosts:
//! - Session binden / neu binden
//! - Effekt bei Bedarf erzeugen, aktivieren, deaktivieren, freigeben
//! - Prozessweite Instanz oder expliziter Kontext (`SharedAecController`)
//! - Host-Konfiguration aus TOML
//!
//! Die eigentliche Signalverarbeitung liegt vollstaendig bei der Plattform.

pub mod config;
pub mod controller;
pub mod error;
pub mod platform;
pub mod session;
pub mod shared;

// Bequeme Re-Exporte der wichtigsten Typen
pub use config::{AecConfig, AecEinstellungen, LoggingEinstellungen};
pub use controller::AecController;
pub use error::{AecError, AecResult};
pub use platform::{EffectHandle, EffectPlatform};
pub use session::AudioSessionId;
pub use shared::{get_instance, instance, SharedAecController};
