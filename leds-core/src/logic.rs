//! Pure Bit-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::LedIndex;

/// Bitmaske für eine LED: `1 << (n-1)`
///
/// # Beispiele
///
/// ```
/// # use leds_core::{led_to_mask, LedIndex};
/// let led = LedIndex::new(5).unwrap();
/// assert_eq!(led_to_mask(led), 0b0001_0000);
/// ```
pub const fn led_to_mask(led: LedIndex) -> u16 {
    1 << led.bit()
}

/// Liest das Bit einer LED aus einem Registerwert
///
/// Maskiert das Bit und schiebt es auf Position 0: `(register & mask) >> (n-1)`.
pub const fn led_bit(register: u16, led: LedIndex) -> bool {
    (register & led_to_mask(led)) >> led.bit() == 1
}
