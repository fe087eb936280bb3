//! # aec-control-observability
//!
//! Structured Logging via tracing-subscriber fuer Hosts, die
//! `aec-control` einbinden. Die Bibliothek selbst emittiert nur
//! `tracing`-Events; der Host entscheidet ueber Subscriber und Format.

pub mod logging;

pub use logging::{log_format_gueltig, log_level_gueltig, logging_initialisieren};
