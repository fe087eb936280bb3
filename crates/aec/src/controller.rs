//! AecController – Lebenszyklus eines einzelnen Plattform-AEC-Effekts
//!
//! Ablauf: Session binden -> Effekt erzeugen -> aktivieren -> deaktivieren
//! -> freigeben. Der Controller besitzt das Effekt-Handle exklusiv.
//! Ein Handle existiert nur, solange eine Session gebunden ist.

use tracing::{debug, info, warn};

use crate::error::{AecError, AecResult};
use crate::platform::{EffectHandle, EffectPlatform};
use crate::session::AudioSessionId;

/// Echo-Cancellation-Controller
///
/// Nicht intern synchronisiert. Fuer Zugriff aus mehreren Threads
/// `SharedAecController` verwenden.
pub struct AecController<P: EffectPlatform> {
    platform: P,
    session_id: AudioSessionId,
    /// Zuletzt von der Plattform gemeldeter Zustand
    enabled: bool,
    effect: Option<Box<dyn EffectHandle>>,
}

impl<P: EffectPlatform> AecController<P> {
    /// Erstellt einen Controller ohne Session und ohne Effekt
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            session_id: AudioSessionId::UNSET,
            enabled: false,
            effect: None,
        }
    }

    /// Bindet den Controller an eine neue Audio-Session.
    ///
    /// Ein vorhandener Effekt wird sofort freigegeben, egal ob aktiv.
    /// Danach muss der Aufrufer erneut `enable_aec()` aufrufen.
    pub fn set_audio_session_id(&mut self, id: impl Into<AudioSessionId>) {
        let id = id.into();
        if let Some(effect) = self.effect.take() {
            info!(alt = %self.session_id, neu = %id, "Session gewechselt, AEC-Effekt freigegeben");
            effect.release();
        }
        // Der freigegebene Effekt laeuft nicht mehr
        self.enabled = false;
        self.session_id = id;
        debug!(session = %id, "Audio-Session gebunden");
    }

    /// Aktiviert die Echo-Cancellation.
    ///
    /// Gibt den von der Plattform zurueckgelesenen Zustand zurueck. `false`
    /// bei bereits aktivem AEC, fehlender Session, nicht verfuegbarem
    /// Effekttyp oder fehlgeschlagener Erzeugung.
    pub fn enable_aec(&mut self) -> bool {
        match self.try_enable_aec() {
            Ok(enabled) => enabled,
            Err(e) => {
                debug!(session = %self.session_id, grund = %e, "AEC nicht aktiviert");
                false
            }
        }
    }

    /// Wie `enable_aec()`, liefert aber den Grund eines Fehlschlags.
    pub fn try_enable_aec(&mut self) -> AecResult<bool> {
        if self.enabled {
            return Err(AecError::BereitsAktiviert);
        }
        if !self.session_id.is_set() {
            return Err(AecError::KeineSession);
        }
        if !self.platform.is_available() {
            warn!("Echo-Cancellation auf diesem Geraet nicht verfuegbar");
            return Err(AecError::NichtVerfuegbar);
        }

        let session = self.session_id;
        let effect = match self.effect.take() {
            Some(effect) => effect,
            None => {
                let effect = self.platform.create(session).ok_or_else(|| {
                    warn!(session = %session, "AEC-Effekt konnte nicht erzeugt werden");
                    AecError::ErstellungFehlgeschlagen { session }
                })?;
                info!(session = %session, "AEC-Effekt erzeugt");
                effect
            }
        };
        let effect = self.effect.insert(effect);

        effect.set_enabled(true);
        self.enabled = effect.enabled();

        if self.enabled {
            info!(session = %session, "Echo-Cancellation aktiviert");
        } else {
            warn!(session = %session, "Plattform meldet AEC nach Aktivierung als inaktiv");
        }
        Ok(self.enabled)
    }

    /// Deaktiviert die Echo-Cancellation. Das Handle bleibt erhalten.
    pub fn disable_aec(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(effect) = self.effect.as_mut() {
            effect.set_enabled(false);
            self.enabled = false;
            info!(session = %self.session_id, "Echo-Cancellation deaktiviert");
        }
    }

    /// Gibt den zwischengespeicherten Zustand zurueck (keine Plattform-Abfrage)
    pub fn is_aec_enabled(&self) -> bool {
        self.enabled
    }

    /// Gibt den Effekt frei und setzt Session und Zustand zurueck.
    /// Mehrfacher Aufruf ist unkritisch.
    pub fn release(&mut self) {
        if let Some(effect) = self.effect.take() {
            effect.release();
            info!(session = %self.session_id, "AEC-Effekt freigegeben");
        }
        self.enabled = false;
        self.session_id = AudioSessionId::UNSET;
    }

    /// Aktuell gebundene Session
    pub fn session_id(&self) -> AudioSessionId {
        self.session_id
    }

    /// Gibt zurueck ob ein Effekt-Handle existiert
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }
}

impl<P: EffectPlatform> Drop for AecController<P> {
    fn drop(&mut self) {
        if let Some(effect) = self.effect.take() {
            effect.release();
        }
    }
}
