//! Peripheral Drivers
//!
//! The port C / ADC driver, its critical-section wrapper and
//! `embedded-hal` pin adapters built on top of it.

pub mod indicator;
pub mod peripheral;
pub mod shared;
