//! Aufzeichnende Test-Plattform fuer die Integration-Tests

#![allow(dead_code)]

use aec_control::{AudioSessionId, EffectHandle, EffectPlatform};
use parking_lot::Mutex;
use std::sync::Arc;

/// Protokollierter Plattform-Aufruf; `handle` ist die laufende Nummer des Effekts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aufruf {
    Erzeugt { handle: u32, session: i32 },
    SetEnabled { handle: u32, enabled: bool },
    Freigegeben { handle: u32 },
}

#[derive(Default)]
struct Zustand {
    aufrufe: Vec<Aufruf>,
    naechstes_handle: u32,
}

/// Plattform mit einstellbarem Verhalten
#[derive(Clone)]
pub struct FakePlatform {
    pub verfuegbar: bool,
    pub erzeugung_ok: bool,
    pub meldet_aktiv: bool,
    zustand: Arc<Mutex<Zustand>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            verfuegbar: true,
            erzeugung_ok: true,
            meldet_aktiv: true,
            zustand: Arc::new(Mutex::new(Zustand::default())),
        }
    }

    pub fn aufrufe(&self) -> Vec<Aufruf> {
        self.zustand.lock().aufrufe.clone()
    }

    /// Nummern aller erzeugten Handles in Reihenfolge
    pub fn erzeugte_handles(&self) -> Vec<u32> {
        self.aufrufe()
            .into_iter()
            .filter_map(|a| match a {
                Aufruf::Erzeugt { handle, .. } => Some(handle),
                _ => None,
            })
            .collect()
    }
}

struct FakeEffect {
    nummer: u32,
    aktiv: bool,
    meldet_aktiv: bool,
    zustand: Arc<Mutex<Zustand>>,
}

impl EffectPlatform for FakePlatform {
    fn is_available(&self) -> bool {
        self.verfuegbar
    }

    fn create(&self, session: AudioSessionId) -> Option<Box<dyn EffectHandle>> {
        if !self.erzeugung_ok {
            return None;
        }
        let mut zustand = self.zustand.lock();
        zustand.naechstes_handle += 1;
        let nummer = zustand.naechstes_handle;
        zustand.aufrufe.push(Aufruf::Erzeugt {
            handle: nummer,
            session: session.inner(),
        });
        Some(Box::new(FakeEffect {
            nummer,
            aktiv: false,
            meldet_aktiv: self.meldet_aktiv,
            zustand: Arc::clone(&self.zustand),
        }))
    }
}

impl EffectHandle for FakeEffect {
    fn set_enabled(&mut self, enabled: bool) {
        self.zustand.lock().aufrufe.push(Aufruf::SetEnabled {
            handle: self.nummer,
            enabled,
        });
        self.aktiv = enabled && self.meldet_aktiv;
    }

    fn enabled(&self) -> bool {
        self.aktiv
    }

    fn release(self: Box<Self>) {
        self.zustand
            .lock()
            .aufrufe
            .push(Aufruf::Freigegeben { handle: self.nummer });
    }
}
