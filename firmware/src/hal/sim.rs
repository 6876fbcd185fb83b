//! Simulated register file
//!
//! Models just enough of port C and the ADC to exercise the driver on a
//! host: PINC reflects output levels on output lines and externally driven
//! levels on input lines, and a conversion started through ADCSRA completes
//! after a configurable number of status polls, loading ADCL/ADCH from a
//! preset result.

use heapless::Vec;

use super::registers::{Register, RegisterFile};
use crate::config::adc_bits::{ADEN, ADIF, ADSC};

/// Capacity of the write log
pub const WRITE_LOG_CAPACITY: usize = 64;

const ADSC_MASK: u8 = 1 << ADSC;
const ADEN_MASK: u8 = 1 << ADEN;
const ADIF_MASK: u8 = 1 << ADIF;

/// One logged register write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Register written
    pub reg: Register,
    /// Value written (before any hardware side effect)
    pub value: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    Idle,
    Running { remaining: u32 },
}

/// Host-side register file with a simulated ADC
#[derive(Clone, Debug)]
pub struct SimRegisters {
    regs: [u8; Register::COUNT],
    input_levels: u8,
    conversion: Conversion,
    latency: u32,
    stalled: bool,
    result: (u8, u8),
    conversions_started: u32,
    status_polls: u32,
    writes: Vec<RegisterWrite, WRITE_LOG_CAPACITY>,
    log_overflowed: bool,
}

impl SimRegisters {
    /// Create a register file in its power-on state (all registers zero,
    /// input lines idle high)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: [0; Register::COUNT],
            input_levels: 0xFF,
            conversion: Conversion::Idle,
            latency: 0,
            stalled: false,
            result: (0, 0),
            conversions_started: 0,
            status_polls: 0,
            writes: Vec::new(),
            log_overflowed: false,
        }
    }

    /// Builder form of [`Self::poke`]
    #[must_use]
    pub fn with(mut self, reg: Register, value: u8) -> Self {
        self.poke(reg, value);
        self
    }

    /// Store a raw value without side effects or logging
    pub fn poke(&mut self, reg: Register, value: u8) {
        self.regs[reg.index()] = value;
    }

    /// Current value without side effects
    ///
    /// PINC is computed the same way a driver read sees it.
    #[must_use]
    pub fn peek(&self, reg: Register) -> u8 {
        match reg {
            Register::Pinc => self.pin_levels(),
            _ => self.regs[reg.index()],
        }
    }

    /// Set the level every input line is driven to
    pub fn set_input_levels(&mut self, levels: u8) {
        self.input_levels = levels;
    }

    /// Drive a single input line high or low
    ///
    /// `bit` selects a line of the 8-bit port; only its low three bits are
    /// used.
    pub fn drive_input(&mut self, bit: u8, high: bool) {
        let mask = 1 << (bit & 7);
        if high {
            self.input_levels |= mask;
        } else {
            self.input_levels &= !mask;
        }
    }

    /// Bytes the next conversion leaves in ADCL and ADCH
    ///
    /// Any byte content is accepted, including bits the 10-bit converter
    /// would never set in ADCH.
    pub fn set_conversion_result(&mut self, low: u8, high: u8) {
        self.result = (low, high);
    }

    /// Number of busy status reads before a conversion completes
    pub fn set_conversion_latency(&mut self, polls: u32) {
        self.latency = polls;
    }

    /// Make conversions never complete
    pub fn stall_conversions(&mut self, stalled: bool) {
        self.stalled = stalled;
    }

    /// Check if a conversion is in progress
    #[must_use]
    pub const fn is_converting(&self) -> bool {
        matches!(self.conversion, Conversion::Running { .. })
    }

    /// Conversions started since creation
    #[must_use]
    pub const fn conversions_started(&self) -> u32 {
        self.conversions_started
    }

    /// ADCSRA reads observed since creation
    #[must_use]
    pub const fn status_polls(&self) -> u32 {
        self.status_polls
    }

    /// Logged writes, oldest first
    #[must_use]
    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    /// Logged writes to one register, oldest first
    pub fn writes_to(&self, reg: Register) -> impl Iterator<Item = u8> + '_ {
        self.writes
            .iter()
            .filter(move |w| w.reg == reg)
            .map(|w| w.value)
    }

    /// True if writes were dropped because the log was full
    #[must_use]
    pub const fn log_overflowed(&self) -> bool {
        self.log_overflowed
    }

    /// Empty the write log
    pub fn clear_writes(&mut self) {
        self.writes.clear();
        self.log_overflowed = false;
    }

    fn pin_levels(&self) -> u8 {
        let ddr = self.regs[Register::Ddrc.index()];
        let port = self.regs[Register::Portc.index()];
        (ddr & port) | (!ddr & self.input_levels)
    }

    fn log(&mut self, reg: Register, value: u8) {
        if self.writes.push(RegisterWrite { reg, value }).is_err() {
            self.log_overflowed = true;
        }
    }

    fn write_adcsra(&mut self, value: u8) {
        let old = self.regs[Register::Adcsra.index()];
        // Writing one to ADIF clears it
        let flag = if value & ADIF_MASK != 0 {
            0
        } else {
            old & ADIF_MASK
        };
        let mut stored = (value & !ADIF_MASK) | flag;

        if value & ADSC_MASK != 0 {
            if value & ADEN_MASK == 0 {
                stored &= !ADSC_MASK;
            } else if self.conversion == Conversion::Idle {
                self.conversion = Conversion::Running {
                    remaining: self.latency,
                };
                self.conversions_started += 1;
            }
        }
        if self.is_converting() {
            stored |= ADSC_MASK;
        }

        self.regs[Register::Adcsra.index()] = stored;
    }

    fn poll_conversion(&mut self) {
        self.status_polls += 1;
        if let Conversion::Running { remaining } = self.conversion {
            if self.stalled {
                return;
            }
            if remaining == 0 {
                self.complete_conversion();
            } else {
                self.conversion = Conversion::Running {
                    remaining: remaining - 1,
                };
            }
        }
    }

    fn complete_conversion(&mut self) {
        self.conversion = Conversion::Idle;
        self.regs[Register::Adcl.index()] = self.result.0;
        self.regs[Register::Adch.index()] = self.result.1;
        let status = &mut self.regs[Register::Adcsra.index()];
        *status = (*status & !ADSC_MASK) | ADIF_MASK;
    }
}

impl Default for SimRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile for SimRegisters {
    fn read(&mut self, reg: Register) -> u8 {
        match reg {
            Register::Pinc => self.pin_levels(),
            Register::Adcsra => {
                self.poll_conversion();
                self.regs[reg.index()]
            }
            _ => self.regs[reg.index()],
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.log(reg, value);
        match reg {
            // Writing ones to PINC toggles the matching PORTC bits
            Register::Pinc => self.regs[Register::Portc.index()] ^= value,
            // Result registers are read-only
            Register::Adcl | Register::Adch => {}
            Register::Adcsra => self.write_adcsra(value),
            _ => self.regs[reg.index()] = value,
        }
    }
}
