//! Port C GPIO sequencing
//!
//! Direction setup, indicator bit writes and auxiliary input reads, each
//! expressed as read-modify-write operations on a [`RegisterFile`].

use super::registers::{Register, RegisterFile};
use crate::config::{init, AUX_INPUT_BIT, INDICATOR_MASK};
use crate::types::{Indicator, IndicatorPattern, LedState};

/// Configure port C direction and default levels
///
/// PC0..PC2 become outputs driven low, PC3 an input with pull-up, PC4 an
/// input without pull-up. PC5..PC7 are left as they were. The five steps
/// are applied in this order on every call.
pub fn init_port<R: RegisterFile>(regs: &mut R) {
    regs.set_bits(Register::Ddrc, init::DDR_OUTPUTS);
    regs.and_bits(Register::Portc, init::PORT_INDICATORS_OFF);
    regs.and_bits(Register::Ddrc, init::DDR_INPUTS);
    regs.set_bits(Register::Portc, init::PORT_AUX_PULLUP);
    regs.and_bits(Register::Portc, init::PORT_FLOAT_LOW);
}

/// Drive one indicator, leaving every other PORTC bit untouched
pub fn write_indicator<R: RegisterFile>(regs: &mut R, indicator: Indicator, state: LedState) {
    match state {
        LedState::On => regs.set_bits(Register::Portc, indicator.mask()),
        LedState::Off => regs.clear_bits(Register::Portc, indicator.mask()),
    }
}

/// Replace the indicator group with a pattern
///
/// Two steps: the group is cleared, then the pattern is ORed in. An
/// observer between the steps sees all indicators off.
pub fn write_pattern<R: RegisterFile>(regs: &mut R, pattern: IndicatorPattern) {
    regs.clear_bits(Register::Portc, INDICATOR_MASK);
    regs.set_bits(Register::Portc, pattern.bits());
}

/// Indicator state as currently latched in PORTC
pub fn indicator_state<R: RegisterFile>(regs: &mut R, indicator: Indicator) -> LedState {
    LedState::from_bit(regs.read(Register::Portc) & indicator.mask() != 0)
}

/// Indicator group as currently latched in PORTC
pub fn pattern<R: RegisterFile>(regs: &mut R) -> IndicatorPattern {
    IndicatorPattern::new(regs.read(Register::Portc))
}

/// Level of the auxiliary input line
pub fn aux_is_low<R: RegisterFile>(regs: &mut R) -> bool {
    regs.read(Register::Pinc) & (1 << AUX_INPUT_BIT) == 0
}
