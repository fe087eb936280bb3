//! Fehlertypen fuer die AEC-Steuerung

use thiserror::Error;

use crate::session::AudioSessionId;

/// Alle moeglichen Fehler der AEC-Steuerung
#[derive(Debug, Error)]
pub enum AecError {
    #[error("Keine Audio-Session gebunden")]
    KeineSession,

    #[error("Echo-Cancellation ist bereits aktiviert")]
    BereitsAktiviert,

    #[error("Echo-Cancellation wird von diesem Geraet nicht unterstuetzt")]
    NichtVerfuegbar,

    #[error("AEC-Effekt fuer {session} konnte nicht erzeugt werden")]
    ErstellungFehlgeschlagen { session: AudioSessionId },

    #[error("Konfigurationsfehler: {0}")]
    Konfiguration(String),

    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

impl AecError {
    /// Gibt true zurueck wenn ein spaeterer Versuch Erfolg haben koennte.
    ///
    /// Fehlende Session und doppelte Aktivierung sind Aufruffehler und
    /// aendern sich nicht durch Warten.
    pub fn ist_wiederholbar(&self) -> bool {
        matches!(
            self,
            Self::NichtVerfuegbar | Self::ErstellungFehlgeschlagen { .. }
        )
    }
}

pub type AecResult<T> = Result<T, AecError>;
