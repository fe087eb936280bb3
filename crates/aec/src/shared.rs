//! Geteilter Controller und prozessweite Instanz
//!
//! `SharedAecController` ist der explizite Kontext, den der Host beim Start
//! einmal erzeugt und an die Audio-Pipeline weiterreicht. Jede Operation
//! haelt den Mutex fuer den gesamten Zustandswechsel.
//!
//! `get_instance()` stellt zusaetzlich genau eine prozessweite Instanz
//! bereit, lazy und thread-sicher initialisiert.

use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

use crate::controller::AecController;
use crate::error::AecResult;
use crate::platform::EffectPlatform;
use crate::session::AudioSessionId;

type DynController = AecController<Box<dyn EffectPlatform>>;

/// Thread-sicherer, klonbarer Zugriff auf einen `AecController`
#[derive(Clone)]
pub struct SharedAecController {
    inner: Arc<Mutex<DynController>>,
}

impl SharedAecController {
    /// Erstellt einen neuen geteilten Controller fuer die Plattform
    pub fn new(platform: impl EffectPlatform + 'static) -> Self {
        let platform: Box<dyn EffectPlatform> = Box::new(platform);
        Self {
            inner: Arc::new(Mutex::new(AecController::new(platform))),
        }
    }

    /// Bindet eine neue Session, siehe `AecController::set_audio_session_id`
    pub fn set_audio_session_id(&self, id: impl Into<AudioSessionId>) {
        self.inner.lock().set_audio_session_id(id);
    }

    /// Aktiviert AEC, siehe `AecController::enable_aec`
    pub fn enable_aec(&self) -> bool {
        self.inner.lock().enable_aec()
    }

    /// Aktiviert AEC mit Fehlergrund, siehe `AecController::try_enable_aec`
    pub fn try_enable_aec(&self) -> AecResult<bool> {
        self.inner.lock().try_enable_aec()
    }

    /// Deaktiviert AEC, das Handle bleibt erhalten
    pub fn disable_aec(&self) {
        self.inner.lock().disable_aec();
    }

    /// Zwischengespeicherter Zustand
    pub fn is_aec_enabled(&self) -> bool {
        self.inner.lock().is_aec_enabled()
    }

    /// Gibt Effekt und Session frei
    pub fn release(&self) {
        self.inner.lock().release();
    }

    /// Aktuell gebundene Session
    pub fn session_id(&self) -> AudioSessionId {
        self.inner.lock().session_id()
    }

    /// Gibt zurueck ob ein Effekt-Handle existiert
    pub fn has_effect(&self) -> bool {
        self.inner.lock().has_effect()
    }

    /// Gibt true zurueck wenn beide auf denselben Controller zeigen
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

static INSTANZ: OnceLock<SharedAecController> = OnceLock::new();

/// Gibt die prozessweite Instanz zurueck und erzeugt sie beim ersten Aufruf.
///
/// Nur die Fabrik des ersten Aufrufs wird ausgefuehrt. Bei gleichzeitigen
/// ersten Aufrufen entsteht trotzdem genau eine Instanz.
pub fn get_instance<F, P>(platform: F) -> &'static SharedAecController
where
    F: FnOnce() -> P,
    P: EffectPlatform + 'static,
{
    INSTANZ.get_or_init(|| {
        tracing::debug!("Prozessweiter AecController erzeugt");
        SharedAecController::new(platform())
    })
}

/// Gibt die prozessweite Instanz zurueck, falls sie bereits existiert
pub fn instance() -> Option<&'static SharedAecController> {
    INSTANZ.get()
}
