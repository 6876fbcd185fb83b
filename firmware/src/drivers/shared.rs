//! Interrupt-safe sharing of the peripheral driver
//!
//! The driver's read-modify-write sequences are not atomic. When the main
//! loop and an interrupt handler both touch PORTC, every operation must run
//! with interrupts disabled; [`SharedPeripheral`] does that through
//! `critical-section`.

use core::cell::RefCell;

use critical_section::Mutex;

use super::peripheral::PeripheralDriver;
use crate::hal::adc::{AdcReading, AdcResult};
use crate::hal::registers::RegisterFile;
use crate::types::{Indicator, IndicatorPattern, LedState};

/// A [`PeripheralDriver`] behind a critical-section mutex
///
/// Can live in a `static`. Conversions also run inside the critical
/// section, so interrupts stay masked for a whole conversion.
pub struct SharedPeripheral<R> {
    inner: Mutex<RefCell<PeripheralDriver<R>>>,
}

impl<R> SharedPeripheral<R> {
    /// Wrap a driver
    #[must_use]
    pub const fn new(driver: PeripheralDriver<R>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from inside `f`.
    pub fn with<T>(&self, f: impl FnOnce(&mut PeripheralDriver<R>) -> T) -> T {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Unwrap the driver
    pub fn into_inner(self) -> PeripheralDriver<R> {
        self.inner.into_inner().into_inner()
    }
}

impl<R: RegisterFile> SharedPeripheral<R> {
    /// See [`PeripheralDriver::init_peripheral`]
    pub fn init_peripheral(&self) {
        self.with(PeripheralDriver::init_peripheral);
    }

    /// See [`PeripheralDriver::set_led`]
    pub fn set_led(&self, pin: u8, state: u8) {
        self.with(|p| p.set_led(pin, state));
    }

    /// See [`PeripheralDriver::set_indicator`]
    pub fn set_indicator(&self, indicator: Indicator, state: LedState) {
        self.with(|p| p.set_indicator(indicator, state));
    }

    /// See [`PeripheralDriver::set_led_value`]
    pub fn set_led_value(&self, x: u8) {
        self.with(|p| p.set_led_value(x));
    }

    /// See [`PeripheralDriver::set_pattern`]
    pub fn set_pattern(&self, pattern: IndicatorPattern) {
        self.with(|p| p.set_pattern(pattern));
    }

    /// See [`PeripheralDriver::pattern`]
    pub fn pattern(&self) -> IndicatorPattern {
        self.with(PeripheralDriver::pattern)
    }

    /// See [`PeripheralDriver::indicator`]
    pub fn indicator(&self, indicator: Indicator) -> LedState {
        self.with(|p| p.indicator(indicator))
    }

    /// See [`PeripheralDriver::aux_is_low`]
    pub fn aux_is_low(&self) -> bool {
        self.with(PeripheralDriver::aux_is_low)
    }

    /// See [`PeripheralDriver::read_adc`]
    pub fn read_adc(&self, channel: u8) -> u16 {
        self.with(|p| p.read_adc(channel))
    }

    /// See [`PeripheralDriver::read_adc_bounded`]
    pub fn read_adc_bounded(&self, channel: u8, max_polls: u32) -> AdcResult<AdcReading> {
        self.with(|p| p.read_adc_bounded(channel, max_polls))
    }
}
