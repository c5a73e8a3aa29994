//! LEDs Core - Treiber für 16 LEDs in einem 16-Bit-Register
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Das Register gehört dem Aufrufer und wird als `&mut` an die [`LedBank`] geliehen.
//!
//! ```
//! use leds_core::LedBank;
//!
//! let mut register: u16 = 0xFFFF;
//! let mut leds = LedBank::new(&mut register); // alle LEDs aus
//! leds.turn_on(3).unwrap();
//! assert_eq!(leds.is_on(3), Ok(true));
//! drop(leds);
//! assert_eq!(register, 0x0004);
//! ```

#![no_std]

pub mod bank;
pub mod config;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use bank::LedBank;
pub use logic::{led_bit, led_to_mask};
pub use traits::{LedError, LedPort};
pub use types::{LedIndex, LedSnapshot};
