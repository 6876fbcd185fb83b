//! Hardware Abstraction Layer
//!
//! Register-level access to port C and the ADC. Every peripheral operation
//! goes through [`registers::RegisterFile`], so the same sequencing runs on
//! the target against memory-mapped registers and on a host against
//! [`sim::SimRegisters`].

pub mod adc;
pub mod gpio;
#[cfg(feature = "embedded")]
pub mod mmio;
pub mod registers;
pub mod sim;
