//! LED-Bank: 16 LEDs als Bits in einem geliehenen Register
//!
//! Bit `n-1` des Registers gehört zu LED `n`. Jede Operation mit
//! LED-Nummer validiert zuerst den Bereich 1..=16; ungültige Nummern
//! liefern [`LedError::InvalidIndex`] und das Register wird nicht angefasst.

use crate::config::{ALL_LEDS_OFF, ALL_LEDS_ON};
use crate::logic::{led_bit, led_to_mask};
use crate::traits::{LedError, LedPort};
use crate::types::{LedIndex, LedSnapshot};

/// Treiber für 16 LEDs in einem 16-Bit-Register
///
/// Das Register gehört dem Aufrufer. Die Bank hält nur eine `&mut`-Leihe,
/// solange sie lebt. Mehrere Banks auf verschiedenen Registern sind
/// voneinander unabhängig.
///
/// # Generischer Parameter
/// `P: LedPort` ermöglicht:
/// - Virtuelles Register (`u16`) im RAM
/// - Mock Implementation (MockPort) in Tests
/// - MMIO-Wrapper im Production-Code
pub struct LedBank<'a, P: LedPort + ?Sized = u16> {
    port: &'a mut P,
}

impl<'a, P: LedPort + ?Sized> LedBank<'a, P> {
    /// Bindet die Bank an ein Register und schaltet alle LEDs aus
    pub fn new(port: &'a mut P) -> Self {
        port.write(ALL_LEDS_OFF);
        Self { port }
    }

    /// Bindet die Bank an ein (neues) Register und schaltet alle LEDs aus
    ///
    /// Das zuvor gebundene Register bleibt unverändert.
    pub fn init(&mut self, port: &'a mut P) {
        self.port = port;
        self.port.write(ALL_LEDS_OFF);
    }

    /// Schaltet LED `led` ein, andere Bits bleiben unverändert
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidIndex` zurück wenn `led` nicht in 1..=16 liegt
    pub fn turn_on(&mut self, led: i32) -> Result<(), LedError> {
        let led = LedIndex::new(led)?;
        let value = self.port.read() | led_to_mask(led);
        self.port.write(value);
        Ok(())
    }

    /// Schaltet LED `led` aus, andere Bits bleiben unverändert
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InvalidIndex` zurück wenn `led` nicht in 1..=16 liegt
    pub fn turn_off(&mut self, led: i32) -> Result<(), LedError> {
        let led = LedIndex::new(led)?;
        let value = self.port.read() & !led_to_mask(led);
        self.port.write(value);
        Ok(())
    }

    /// `Ok(true)` wenn LED `led` an ist
    pub fn is_on(&self, led: i32) -> Result<bool, LedError> {
        let led = LedIndex::new(led)?;
        Ok(led_bit(self.port.read(), led))
    }

    /// `Ok(true)` wenn LED `led` aus ist
    ///
    /// Für ungültige Nummern liefert das denselben Fehler wie [`is_on`](Self::is_on),
    /// nicht dessen Komplement.
    pub fn is_off(&self, led: i32) -> Result<bool, LedError> {
        let led = LedIndex::new(led)?;
        Ok(!led_bit(self.port.read(), led))
    }

    pub fn turn_on_all(&mut self) {
        self.port.write(ALL_LEDS_ON);
    }

    pub fn turn_off_all(&mut self) {
        self.port.write(ALL_LEDS_OFF);
    }

    /// Aktueller Registerwert
    pub fn state(&self) -> u16 {
        self.port.read()
    }

    pub fn snapshot(&self) -> LedSnapshot {
        LedSnapshot::from_bits(self.port.read())
    }
}
