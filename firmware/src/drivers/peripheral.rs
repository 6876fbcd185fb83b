//! Peripheral Driver
//!
//! Owns a [`RegisterFile`] and exposes the four board operations:
//! initialization, single indicator control, indicator group writes and
//! blocking ADC conversions.
//!
//! The driver takes no locks. Every operation is a short sequence of
//! read-modify-write steps; wrap the driver in
//! [`SharedPeripheral`](super::shared::SharedPeripheral) if it is used from
//! both the main loop and an interrupt handler.

use crate::hal::adc::{self, AdcConfig, AdcReading, AdcResult};
use crate::hal::gpio;
use crate::hal::registers::RegisterFile;
use crate::types::{AdcChannel, Indicator, IndicatorPattern, LedState};

/// Port C indicator and ADC driver
#[derive(Debug)]
pub struct PeripheralDriver<R> {
    regs: R,
    adc: AdcConfig,
}

impl<R> PeripheralDriver<R> {
    /// Create a driver over a register file
    ///
    /// No register is touched until [`PeripheralDriver::init_peripheral`].
    #[must_use]
    pub const fn new(regs: R) -> Self {
        Self {
            regs,
            adc: AdcConfig::DEFAULT,
        }
    }

    /// ADC register patterns in use
    #[must_use]
    pub const fn adc_config(&self) -> &AdcConfig {
        &self.adc
    }

    /// Borrow the register file
    #[must_use]
    pub const fn registers(&self) -> &R {
        &self.regs
    }

    /// Mutably borrow the register file
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Release the register file
    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: RegisterFile> PeripheralDriver<R> {
    /// Configure port C: indicators as outputs and off, PC3 pulled-up
    /// input, PC4 floating input
    ///
    /// Call once at startup before any other operation. Calling it again
    /// reapplies the same pattern.
    pub fn init_peripheral(&mut self) {
        gpio::init_port(&mut self.regs);

        #[cfg(feature = "defmt")]
        defmt::debug!("port C initialized");
    }

    /// Set or clear one indicator from raw identifiers
    ///
    /// `pin` is 0 (red), 1 (yellow) or 2 (green); `state` is 1 (on) or
    /// 0 (off). Any other value makes the call a no-op.
    pub fn set_led(&mut self, pin: u8, state: u8) {
        let decoded = Indicator::from_raw(pin).zip(LedState::from_raw(state));
        let Some((indicator, led)) = decoded else {
            #[cfg(feature = "defmt")]
            defmt::trace!("set_led ignored: pin={=u8} state={=u8}", pin, state);
            return;
        };
        self.set_indicator(indicator, led);
    }

    /// Set or clear one indicator
    pub fn set_indicator(&mut self, indicator: Indicator, state: LedState) {
        gpio::write_indicator(&mut self.regs, indicator, state);
    }

    /// Show the low three bits of `x` on the indicators
    pub fn set_led_value(&mut self, x: u8) {
        self.set_pattern(IndicatorPattern::new(x));
    }

    /// Show a pattern on the indicators
    pub fn set_pattern(&mut self, pattern: IndicatorPattern) {
        gpio::write_pattern(&mut self.regs, pattern);
    }

    /// Indicator state as latched in PORTC
    pub fn indicator(&mut self, indicator: Indicator) -> LedState {
        gpio::indicator_state(&mut self.regs, indicator)
    }

    /// Indicator group as latched in PORTC
    pub fn pattern(&mut self) -> IndicatorPattern {
        gpio::pattern(&mut self.regs)
    }

    /// True while the auxiliary input (PC3) is pulled low
    pub fn aux_is_low(&mut self) -> bool {
        gpio::aux_is_low(&mut self.regs)
    }

    /// Convert one channel and return `ADCL + ADCH * 256`
    ///
    /// `channel` is masked to its low four bits. Blocks until the hardware
    /// clears ADSC, with no timeout.
    pub fn read_adc(&mut self, channel: u8) -> u16 {
        self.sample(AdcChannel::new(channel)).raw()
    }

    /// Convert one channel, blocking without timeout
    pub fn sample(&mut self, channel: AdcChannel) -> AdcReading {
        let reading = adc::blocking_read(&mut self.regs, &self.adc, channel);

        #[cfg(feature = "defmt")]
        defmt::trace!("{} -> {}", channel, reading);

        reading
    }

    /// Convert one channel, reading the status register at most
    /// `max_polls` times
    ///
    /// This is not a drop-in replacement for [`Self::read_adc`]: it returns
    /// [`AdcError::Timeout`](crate::hal::adc::AdcError::Timeout) where
    /// `read_adc` would keep waiting.
    pub fn read_adc_bounded(&mut self, channel: u8, max_polls: u32) -> AdcResult<AdcReading> {
        let result = adc::read_with_poll_limit(
            &mut self.regs,
            &self.adc,
            AdcChannel::new(channel),
            max_polls,
        );

        #[cfg(feature = "defmt")]
        if let Err(e) = &result {
            defmt::warn!("ADC read failed: {}", e);
        }

        result
    }
}
