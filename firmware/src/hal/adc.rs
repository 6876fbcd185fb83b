//! ADC Driver
//!
//! Single-channel polled conversions. A conversion is started by writing
//! ADMUX and ADCSRA, then ADCSRA is polled until the hardware clears ADSC.

use core::fmt;

use super::registers::{Register, RegisterFile};
use crate::config::adc_bits::{ADEN, ADLAR, ADPS0, ADPS1, ADPS2, ADSC, REFS0, REFS1};
use crate::config::{ADC_MAX, ADC_VREF_MV};
use crate::types::AdcChannel;

/// ADC operation result
pub type AdcResult<T> = Result<T, AdcError>;

/// Errors from bounded ADC reads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdcError {
    /// ADSC was still set after the poll limit
    Timeout {
        /// Channel that was being converted
        channel: AdcChannel,
        /// Status reads performed before giving up
        polls: u32,
    },
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout { channel, polls } => write!(
                f,
                "conversion on channel {} did not complete after {} polls",
                channel.number(),
                polls
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AdcError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Timeout { channel, polls } => {
                defmt::write!(f, "Timeout({}, {} polls)", channel, polls);
            }
        }
    }
}

/// Register patterns that surround the channel bits
///
/// ADMUX receives `admux_base | channel`, ADCSRA receives
/// `adcsra_base | ADSC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcConfig {
    /// Reference selection and result alignment bits of ADMUX
    pub admux_base: u8,
    /// Enable and prescaler bits of ADCSRA
    pub adcsra_base: u8,
}

impl AdcConfig {
    /// AVcc reference, right-justified result, ADC enabled, clock / 128
    pub const DEFAULT: Self = Self {
        admux_base: (0 << REFS1) | (1 << REFS0) | (0 << ADLAR),
        adcsra_base: (1 << ADEN) | (1 << ADPS2) | (1 << ADPS1) | (1 << ADPS0),
    };

    /// ADMUX value selecting `channel`
    #[must_use]
    pub const fn admux(&self, channel: AdcChannel) -> u8 {
        self.admux_base | channel.number()
    }

    /// ADCSRA value that starts a conversion
    #[must_use]
    pub const fn adcsra_start(&self) -> u8 {
        self.adcsra_base | (1 << ADSC)
    }
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ADC reading result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcReading {
    /// Raw value as combined from ADCL and ADCH
    raw: u16,
}

impl AdcReading {
    /// Create a new ADC reading from raw value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    /// Combine the result bytes as `low + high * 256`
    ///
    /// The high byte is not masked.
    #[must_use]
    pub const fn from_bytes(low: u8, high: u8) -> Self {
        Self::from_raw(low as u16 + high as u16 * 256)
    }

    /// Get the raw value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// True if the value fits the 10-bit converter range
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.raw <= ADC_MAX
    }

    /// Convert to millivolts against the AVcc reference
    #[must_use]
    pub const fn millivolts(self) -> u32 {
        self.raw as u32 * ADC_VREF_MV / (ADC_MAX as u32 + 1)
    }

    /// Convert to voltage against the AVcc reference
    #[must_use]
    pub fn as_voltage(self) -> f32 {
        f32::from(self.raw) * (ADC_VREF_MV as f32 / 1000.0) / (f32::from(ADC_MAX) + 1.0)
    }
}

impl From<AdcReading> for u16 {
    fn from(reading: AdcReading) -> Self {
        reading.raw
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AdcReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ADC({})", self.raw);
    }
}

/// Select the channel and start one conversion
pub fn start_conversion<R: RegisterFile>(regs: &mut R, config: &AdcConfig, channel: AdcChannel) {
    regs.write(Register::Admux, config.admux(channel));
    regs.write(Register::Adcsra, config.adcsra_start());
}

/// Check if a conversion is in progress
pub fn is_busy<R: RegisterFile>(regs: &mut R) -> bool {
    regs.read(Register::Adcsra) & (1 << ADSC) != 0
}

/// Read the result registers, ADCL first
///
/// On the target, reading ADCL blocks updates of the data registers until
/// ADCH has been read, so the order is fixed.
pub fn read_result<R: RegisterFile>(regs: &mut R) -> AdcReading {
    let low = regs.read(Register::Adcl);
    let high = regs.read(Register::Adch);
    AdcReading::from_bytes(low, high)
}

/// Convert one channel, blocking until the hardware reports completion
///
/// There is no timeout: if ADSC never clears this never returns.
pub fn blocking_read<R: RegisterFile>(
    regs: &mut R,
    config: &AdcConfig,
    channel: AdcChannel,
) -> AdcReading {
    start_conversion(regs, config, channel);
    while is_busy(regs) {}
    read_result(regs)
}

/// Convert one channel, reading ADCSRA at most `max_polls` times
///
/// Unlike [`blocking_read`] this can fail. At least one status read is
/// made. A conversion that timed out is left running.
pub fn read_with_poll_limit<R: RegisterFile>(
    regs: &mut R,
    config: &AdcConfig,
    channel: AdcChannel,
    max_polls: u32,
) -> AdcResult<AdcReading> {
    start_conversion(regs, config, channel);

    let mut polls = 0;
    loop {
        polls += 1;
        if !is_busy(regs) {
            return Ok(read_result(regs));
        }
        if polls >= max_polls {
            return Err(AdcError::Timeout { channel, polls });
        }
    }
}
