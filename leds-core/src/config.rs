// Treiber-Konfiguration: Konstanten für das LED-Register

// ============================================================================
// LED Nummerierung
// ============================================================================

/// Nummer der ersten LED (1-basiert)
pub const FIRST_LED: u8 = 1;

/// Nummer der letzten LED
pub const LAST_LED: u8 = 16;

/// Anzahl der LEDs im Register (ein Bit pro LED)
pub const LED_COUNT: usize = 16;

// ============================================================================
// Register-Werte
// ============================================================================

/// Registerwert: alle LEDs an
pub const ALL_LEDS_ON: u16 = 0xFFFF;

/// Registerwert: alle LEDs aus
pub const ALL_LEDS_OFF: u16 = 0x0000;

/// Numerischer Fehlercode für ungültige LED-Nummern (C-kompatibel)
pub const LED_ERROR: u8 = 255;
