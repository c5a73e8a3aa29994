//! Hardware Abstraction Traits
//!
//! Diese Traits definieren den Zugriff auf das LED-Register
//! ohne konkrete Implementierung.

use core::fmt;

use crate::config::LED_ERROR;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// LED-Nummer liegt außerhalb von 1..=16
    InvalidIndex,
}

impl LedError {
    /// Numerischer Fehlercode für C-artige Aufrufer ([`LED_ERROR`])
    pub const fn code(self) -> u8 {
        match self {
            LedError::InvalidIndex => LED_ERROR,
        }
    }
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InvalidIndex => f.write_str("invalid LED index (expected 1..=16)"),
        }
    }
}

impl core::error::Error for LedError {}

/// Trait für den Zugriff auf das 16-Bit LED-Register
///
/// # Implementierungen
/// - **RAM:** `u16` (virtuelles Register, z.B. in Tests)
/// - **Testing:** MockPort (zählt Schreibzugriffe)
/// - **Production:** Wrapper um ein memory-mapped Register (beim Aufrufer)
pub trait LedPort {
    /// Liest den aktuellen Registerwert
    fn read(&self) -> u16;

    /// Schreibt einen neuen Registerwert
    fn write(&mut self, value: u16);
}

impl LedPort for u16 {
    fn read(&self) -> u16 {
        *self
    }

    fn write(&mut self, value: u16) {
        *self = value;
    }
}

// ============================================================================
// defmt::Format Implementation (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InvalidIndex => defmt::write!(fmt, "InvalidIndex"),
        }
    }
}
