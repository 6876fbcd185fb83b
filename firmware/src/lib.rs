//! Port C Peripheral Firmware Library
//!
//! Register-level driver for an ATmega328P-class board with three
//! indicator LEDs on PC0..PC2, an auxiliary input on PC3 and the on-chip
//! 10-bit ADC used in single-conversion, polled mode.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        DRIVERS                               │
//! │  PeripheralDriver  │  SharedPeripheral  │  IndicatorPin      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                          HAL                                 │
//! │  gpio (port C sequencing)  │  adc (conversion sequencing)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RegisterFile trait                        │
//! │  Mmio (target, PAC)        │  SimRegisters (host)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Register access behind a trait**: the same sequencing runs on the
//!   target and against a simulated register file in host tests
//! - **Raw and typed entry points**: `set_led(u8, u8)` ignores unknown
//!   values, `set_indicator(Indicator, LedState)` cannot receive them
//! - **No unsafe outside `hal::mmio`**
//! - **No hidden timeouts**: `read_adc` waits for the hardware; the
//!   bounded variant is a separate, fallible call

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Each feature pulls in its own critical-section implementation
#[cfg(all(feature = "std", feature = "embedded"))]
compile_error!(
    "features `std` and `embedded` are mutually exclusive; \
     build the target with `--no-default-features --features embedded`"
);

/// Hardware Abstraction Layer
///
/// Register file abstraction plus GPIO and ADC register sequencing.
pub mod hal;

/// Peripheral Drivers
///
/// The board driver, its critical-section wrapper and pin adapters.
pub mod drivers;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use drivers::peripheral::PeripheralDriver;
pub use drivers::shared::SharedPeripheral;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::drivers::indicator::{AuxInput, IndicatorPin};
    pub use crate::drivers::peripheral::PeripheralDriver;
    pub use crate::drivers::shared::SharedPeripheral;
    pub use crate::hal::adc::{AdcConfig, AdcError, AdcReading, AdcResult};
    pub use crate::hal::registers::{Register, RegisterFile};

    #[cfg(feature = "embedded")]
    pub use crate::hal::mmio::Mmio;

    // Common traits
    pub use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
}
