//! Register identifiers and the register file abstraction

use core::fmt;

/// Registers touched by the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    /// Port C input pins
    Pinc,
    /// Port C data direction
    Ddrc,
    /// Port C output / pull-up
    Portc,
    /// ADC result, low byte
    Adcl,
    /// ADC result, high byte
    Adch,
    /// ADC control and status A
    Adcsra,
    /// ADC multiplexer selection
    Admux,
}

impl Register {
    /// Number of distinct registers
    pub const COUNT: usize = 7;

    /// All registers in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Pinc,
        Self::Ddrc,
        Self::Portc,
        Self::Adcl,
        Self::Adch,
        Self::Adcsra,
        Self::Admux,
    ];

    /// Datasheet name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pinc => "PINC",
            Self::Ddrc => "DDRC",
            Self::Portc => "PORTC",
            Self::Adcl => "ADCL",
            Self::Adch => "ADCH",
            Self::Adcsra => "ADCSRA",
            Self::Admux => "ADMUX",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Register {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.name());
    }
}

/// Byte-wide access to the peripheral register set
///
/// Reads take `&mut self`: on the target some reads have side effects
/// (reading ADCL latches ADCH until ADCH is read).
pub trait RegisterFile {
    /// Read a register
    fn read(&mut self, reg: Register) -> u8;

    /// Write a register
    fn write(&mut self, reg: Register, value: u8);

    /// Read, transform and write back a register
    ///
    /// Not atomic; see [`crate::drivers::shared::SharedPeripheral`] when the
    /// register file is shared with interrupt handlers.
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// OR a mask into a register
    fn set_bits(&mut self, reg: Register, mask: u8) {
        self.modify(reg, |v| v | mask);
    }

    /// AND a mask into a register
    fn and_bits(&mut self, reg: Register, mask: u8) {
        self.modify(reg, |v| v & mask);
    }

    /// Clear the bits of a mask
    fn clear_bits(&mut self, reg: Register, mask: u8) {
        self.and_bits(reg, !mask);
    }
}

impl<R: RegisterFile> RegisterFile for &mut R {
    fn read(&mut self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value);
    }
}
