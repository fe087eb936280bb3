//! Schnittstelle zur AEC-Implementierung der Plattform
//!
//! Der Host implementiert diese Traits fuer seine native API (z.B. eine
//! JNI-Bruecke auf `android.media.audiofx.AcousticEchoCanceler`). Der
//! Controller ruft nur diese Methoden auf und verlaesst sich bei der
//! Aktivierung ausschliesslich auf den zurueckgelesenen Zustand.

use crate::session::AudioSessionId;

/// Fabrik fuer plattformseitige Echo-Cancellation-Effekte
pub trait EffectPlatform: Send {
    /// Ob der Effekttyp auf diesem Geraet ueberhaupt existiert.
    /// Wird bei jedem Aktivierungsversuch erneut abgefragt.
    fn is_available(&self) -> bool;

    /// Erzeugt einen Effekt fuer die Session. `None` = Erzeugung fehlgeschlagen.
    fn create(&self, session: AudioSessionId) -> Option<Box<dyn EffectHandle>>;
}

/// Instanz eines Effekts, exklusiv im Besitz des Controllers
pub trait EffectHandle: Send {
    /// Fordert einen Zustandswechsel an. Ob er greift, zeigt erst `enabled()`.
    fn set_enabled(&mut self, enabled: bool);

    /// Massgeblicher Zustand laut Plattform
    fn enabled(&self) -> bool;

    /// Gibt die Plattform-Ressourcen frei und verbraucht das Handle.
    fn release(self: Box<Self>);
}

impl<P: EffectPlatform + ?Sized> EffectPlatform for Box<P> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn create(&self, session: AudioSessionId) -> Option<Box<dyn EffectHandle>> {
        (**self).create(session)
    }
}
