//! Audio-Session-Kennung
//!
//! Newtype um die von der Plattform vergebene Session-ID. Der Wert -1
//! steht fuer "keine Session gebunden".

use serde::{Deserialize, Serialize};

/// Kennung einer Audio-Session der Plattform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioSessionId(i32);

impl AudioSessionId {
    /// Sentinel: keine Session gebunden
    pub const UNSET: Self = Self(-1);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Gibt die rohe Plattform-ID zurueck
    pub fn inner(&self) -> i32 {
        self.0
    }

    /// Gibt true zurueck wenn eine echte Session gebunden ist
    pub fn is_set(&self) -> bool {
        *self != Self::UNSET
    }
}

impl Default for AudioSessionId {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<i32> for AudioSessionId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AudioSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_set() {
            write!(f, "session:{}", self.0)
        } else {
            write!(f, "session:unset")
        }
    }
}
