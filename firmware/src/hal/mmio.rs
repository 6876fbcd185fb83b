//! Register access on the ATmega328P through the `avr-device` PAC
//!
//! The only place in the crate that touches hardware registers.

#![allow(unsafe_code)]

use avr_device::atmega328p::{Peripherals, ADC, PORTC};

use super::registers::{Register, RegisterFile};

/// Port C and ADC register blocks of the target
///
/// The PAC exposes the result as one 16-bit register. Reading
/// [`Register::Adcl`] reads it low byte first and latches the high byte,
/// which [`Register::Adch`] then returns, matching the hardware rule that
/// ADCL must be read before ADCH.
pub struct Mmio {
    portc: PORTC,
    adc: ADC,
    adch_latch: u8,
}

impl Mmio {
    /// Claim the register blocks, returns None if the PAC peripherals were
    /// already taken
    #[must_use]
    pub fn take() -> Option<Self> {
        Peripherals::take().map(|dp| Self::new(dp.PORTC, dp.ADC))
    }

    /// Build from register blocks taken elsewhere
    #[must_use]
    pub const fn new(portc: PORTC, adc: ADC) -> Self {
        Self {
            portc,
            adc,
            adch_latch: 0,
        }
    }

    /// Give the register blocks back
    pub fn release(self) -> (PORTC, ADC) {
        (self.portc, self.adc)
    }
}

impl RegisterFile for Mmio {
    fn read(&mut self, reg: Register) -> u8 {
        match reg {
            Register::Pinc => self.portc.pinc.read().bits(),
            Register::Ddrc => self.portc.ddrc.read().bits(),
            Register::Portc => self.portc.portc.read().bits(),
            Register::Adcl => {
                let [low, high] = self.adc.adc.read().bits().to_le_bytes();
                self.adch_latch = high;
                low
            }
            Register::Adch => self.adch_latch,
            Register::Adcsra => self.adc.adcsra.read().bits(),
            Register::Admux => self.adc.admux.read().bits(),
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: all bit patterns are valid for these registers; the
        // driver composes them from the datasheet bit positions.
        match reg {
            Register::Pinc => self.portc.pinc.write(|w| unsafe { w.bits(value) }),
            Register::Ddrc => self.portc.ddrc.write(|w| unsafe { w.bits(value) }),
            Register::Portc => self.portc.portc.write(|w| unsafe { w.bits(value) }),
            // Result registers are read-only
            Register::Adcl | Register::Adch => {}
            Register::Adcsra => self.adc.adcsra.write(|w| unsafe { w.bits(value) }),
            Register::Admux => self.adc.admux.write(|w| unsafe { w.bits(value) }),
        }
    }
}
