//! Host-Konfiguration fuer die Echo-Cancellation
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! Standardwerte, eine fehlende Datei ist kein Fehler.

use aec_control_observability::{log_format_gueltig, log_level_gueltig};
use serde::{Deserialize, Serialize};

use crate::error::{AecError, AecResult};
use crate::shared::SharedAecController;

/// Vollstaendige Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AecConfig {
    /// AEC-Einstellungen
    pub aec: AecEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// AEC-Einstellungen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AecEinstellungen {
    /// Audio-Session, an die beim Start gebunden wird (None = keine)
    pub session_id: Option<i32>,
    /// AEC direkt nach dem Binden aktivieren
    pub auto_aktivieren: bool,
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl AecConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> AecResult<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| AecError::Konfiguration(format!("Fehler in '{pfad}': {e}")))?;
                config.validieren()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(AecError::Io(e)),
        }
    }

    /// Prueft die Werte, die serde allein nicht abfangen kann
    pub fn validieren(&self) -> AecResult<()> {
        if !log_level_gueltig(&self.logging.level) {
            return Err(AecError::Konfiguration(format!(
                "ungueltiger Log-Level '{}'",
                self.logging.level
            )));
        }
        if !log_format_gueltig(&self.logging.format) {
            return Err(AecError::Konfiguration(format!(
                "ungueltiges Log-Format '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Bindet die konfigurierte Session und aktiviert AEC falls gewuenscht.
    ///
    /// Ohne konfigurierte Session bleibt der Controller unveraendert.
    /// Gibt den danach gueltigen AEC-Zustand zurueck.
    pub fn anwenden(&self, controller: &SharedAecController) -> bool {
        if let Some(id) = self.aec.session_id {
            controller.set_audio_session_id(id);
            if self.aec.auto_aktivieren {
                controller.enable_aec();
            }
        }
        controller.is_aec_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config() {
        let cfg = AecConfig::default();
        assert_eq!(cfg.aec.session_id, None);
        assert!(!cfg.aec.auto_aktivieren);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [aec]
            session_id = 42
            auto_aktivieren = true
        "#;
        let cfg: AecConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.aec.session_id, Some(42));
        assert!(cfg.aec.auto_aktivieren);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn fehlende_datei_liefert_standard() {
        let dir = tempfile::tempdir().unwrap();
        let pfad = dir.path().join("gibt-es-nicht.toml");
        let cfg = AecConfig::laden(pfad.to_str().unwrap()).unwrap();
        assert_eq!(cfg.aec.session_id, None);
    }

    #[test]
    fn kaputte_datei_ist_konfigurationsfehler() {
        let dir = tempfile::tempdir().unwrap();
        let pfad = dir.path().join("aec.toml");
        std::fs::write(&pfad, "[aec\nsession_id = ").unwrap();
        let err = AecConfig::laden(pfad.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AecError::Konfiguration(_)));
    }

    #[test]
    fn datei_laden() {
        let dir = tempfile::tempdir().unwrap();
        let pfad = dir.path().join("aec.toml");
        std::fs::write(&pfad, "[logging]\nformat = \"json\"\n").unwrap();
        let cfg = AecConfig::laden(pfad.to_str().unwrap()).unwrap();
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn standard_config_ist_valide() {
        assert!(AecConfig::default().validieren().is_ok());
    }

    #[test]
    fn ungueltiger_log_level_wird_abgelehnt() {
        let dir = tempfile::tempdir().unwrap();
        let pfad = dir.path().join("aec.toml");
        std::fs::write(&pfad, "[logging]\nlevel = \"verbose\"\n").unwrap();
        let err = AecConfig::laden(pfad.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AecError::Konfiguration(ref m) if m.contains("verbose")));
    }

    #[test]
    fn ungueltiges_log_format_wird_abgelehnt() {
        let dir = tempfile::tempdir().unwrap();
        let pfad = dir.path().join("aec.toml");
        std::fs::write(&pfad, "[logging]\nlevel = \"debug\"\nformat = \"xml\"\n").unwrap();
        let err = AecConfig::laden(pfad.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AecError::Konfiguration(ref m) if m.contains("xml")));
    }
}
