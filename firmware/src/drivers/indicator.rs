//! `embedded-hal` pin adapters
//!
//! Lets generic drivers written against `embedded_hal::digital` drive one
//! indicator or read the auxiliary input. Each pin borrows the shared
//! driver, so any number of pins can coexist and every access runs inside
//! a critical section.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use super::shared::SharedPeripheral;
use crate::hal::registers::RegisterFile;
use crate::types::{Indicator, LedState};

/// One indicator LED as an output pin
pub struct IndicatorPin<'a, R> {
    shared: &'a SharedPeripheral<R>,
    indicator: Indicator,
}

impl<'a, R: RegisterFile> IndicatorPin<'a, R> {
    /// Create a pin for `indicator`; the current level is left as is
    #[must_use]
    pub const fn new(shared: &'a SharedPeripheral<R>, indicator: Indicator) -> Self {
        Self { shared, indicator }
    }

    /// Indicator driven by this pin
    #[must_use]
    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }

    /// Get current state
    #[must_use]
    pub fn state(&self) -> LedState {
        self.shared.indicator(self.indicator)
    }

    /// Turn LED on
    pub fn on(&mut self) {
        self.shared.set_indicator(self.indicator, LedState::On);
    }

    /// Turn LED off
    pub fn off(&mut self) {
        self.shared.set_indicator(self.indicator, LedState::Off);
    }
}

impl<R> ErrorType for IndicatorPin<'_, R> {
    type Error = Infallible;
}

impl<R: RegisterFile> OutputPin for IndicatorPin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on();
        Ok(())
    }
}

impl<R: RegisterFile> StatefulOutputPin for IndicatorPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state().is_on())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.state().is_on())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        // Read and write under one critical section
        let indicator = self.indicator;
        self.shared.with(|p| {
            let next = p.indicator(indicator).toggle();
            p.set_indicator(indicator, next);
        });
        Ok(())
    }
}

/// Auxiliary input (PC3), active low with internal pull-up
pub struct AuxInput<'a, R> {
    shared: &'a SharedPeripheral<R>,
}

impl<'a, R: RegisterFile> AuxInput<'a, R> {
    /// Create the input; relies on `init_peripheral` for the pull-up
    #[must_use]
    pub const fn new(shared: &'a SharedPeripheral<R>) -> Self {
        Self { shared }
    }

    /// Check if the line is held low
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.shared.aux_is_low()
    }
}

impl<R> ErrorType for AuxInput<'_, R> {
    type Error = Infallible;
}

impl<R: RegisterFile> InputPin for AuxInput<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_pressed())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_pressed())
    }
}
