//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::config::{FIRST_LED, LAST_LED};
use crate::logic::{led_bit, led_to_mask};
use crate::traits::LedError;

/// Gültige LED-Nummer im Bereich 1..=16
///
/// Kann nur über die Validierung erzeugt werden, daher ist jede
/// `LedIndex`-Instanz garantiert im Bereich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct LedIndex(u8);

impl LedIndex {
    /// Erste LED
    pub const FIRST: LedIndex = LedIndex(FIRST_LED);

    /// Letzte LED
    pub const LAST: LedIndex = LedIndex(LAST_LED);

    /// Validiert eine LED-Nummer
    ///
    /// ```
    /// # use leds_core::{LedError, LedIndex};
    /// assert_eq!(LedIndex::new(16).map(LedIndex::get), Ok(16));
    /// assert_eq!(LedIndex::new(0), Err(LedError::InvalidIndex));
    /// assert_eq!(LedIndex::new(-13), Err(LedError::InvalidIndex));
    /// ```
    pub const fn new(led: i32) -> Result<Self, LedError> {
        if led >= FIRST_LED as i32 && led <= LAST_LED as i32 {
            Ok(LedIndex(led as u8))
        } else {
            Err(LedError::InvalidIndex)
        }
    }

    /// LED-Nummer (1-basiert)
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Bit-Position im Register (0-basiert)
    pub const fn bit(self) -> u32 {
        (self.0 - FIRST_LED) as u32
    }

    /// Bitmaske `1 << (n-1)`
    pub const fn mask(self) -> u16 {
        led_to_mask(self)
    }

    /// Iteriert über alle LEDs 1..=16
    pub fn all() -> impl Iterator<Item = LedIndex> {
        (FIRST_LED..=LAST_LED).map(LedIndex)
    }
}

impl TryFrom<i32> for LedIndex {
    type Error = LedError;

    fn try_from(led: i32) -> Result<Self, Self::Error> {
        LedIndex::new(led)
    }
}

impl TryFrom<u8> for LedIndex {
    type Error = LedError;

    fn try_from(led: u8) -> Result<Self, Self::Error> {
        LedIndex::new(led as i32)
    }
}

impl From<LedIndex> for u8 {
    fn from(led: LedIndex) -> Self {
        led.0
    }
}

/// Momentaufnahme des Registers
///
/// Wird von [`LedBank::snapshot`](crate::LedBank::snapshot) erzeugt und ist
/// unabhängig vom geliehenen Register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LedSnapshot(u16);

impl LedSnapshot {
    pub const fn from_bits(bits: u16) -> Self {
        LedSnapshot(bits)
    }

    /// Roher Registerwert
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_on(self, led: LedIndex) -> bool {
        led_bit(self.0, led)
    }

    /// Anzahl eingeschalteter LEDs
    pub const fn count_on(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Eingeschaltete LEDs in aufsteigender Reihenfolge
    ///
    /// ```
    /// # use leds_core::{LedIndex, LedSnapshot};
    /// let snapshot = LedSnapshot::from_bits(0b0100_0100);
    /// let lit: Vec<u8> = snapshot.iter_on().map(LedIndex::get).collect();
    /// assert_eq!(lit, [3, 7]);
    /// ```
    pub fn iter_on(self) -> impl Iterator<Item = LedIndex> {
        LedIndex::all().filter(move |led| self.is_on(*led))
    }
}

impl From<LedSnapshot> for u16 {
    fn from(snapshot: LedSnapshot) -> Self {
        snapshot.0
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED {}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedSnapshot {{ bits: {=u16:#x}, on: {} }}",
            self.0,
            self.count_on()
        )
    }
}
