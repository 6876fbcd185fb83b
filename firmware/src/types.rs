//! Shared types used across the peripheral driver
//!
//! Indicator identifiers, output states and ADC channel selectors. Each
//! type keeps its raw `u8` encoding so callers holding untyped values can
//! convert at the boundary.

use core::fmt;

use crate::config::{ADC_CHANNEL_MASK, INDICATOR_MASK};

/// One of the three indicator LEDs on port C
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Red LED (PC0)
    Red,
    /// Yellow LED (PC1)
    Yellow,
    /// Green LED (PC2)
    Green,
}

impl Indicator {
    /// All indicators in bit order
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// PORTC bit position for each indicator, indexed by discriminant
    const BIT_TABLE: [u8; 3] = [0, 1, 2];

    /// Decode a raw pin identifier, returns None if unrecognized
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Red),
            1 => Some(Self::Yellow),
            2 => Some(Self::Green),
            _ => None,
        }
    }

    /// Raw pin identifier
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Bit position in PORTC
    #[must_use]
    pub const fn bit(self) -> u8 {
        Self::BIT_TABLE[self as usize]
    }

    /// Single-bit mask in PORTC
    #[must_use]
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("RED"),
            Self::Yellow => f.write_str("YELLOW"),
            Self::Green => f.write_str("GREEN"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Indicator {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Red => defmt::write!(f, "RED"),
            Self::Yellow => defmt::write!(f, "YELLOW"),
            Self::Green => defmt::write!(f, "GREEN"),
        }
    }
}

/// Indicator LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Decode a raw state value, returns None if unrecognized
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }

    /// Raw state value
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// State encoded by a single register bit
    #[must_use]
    pub const fn from_bit(set: bool) -> Self {
        if set {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Check if on
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Value shown on the whole indicator group, low three bits only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IndicatorPattern(u8);

impl IndicatorPattern {
    /// All indicators off
    pub const OFF: Self = Self(0);

    /// All indicators on
    pub const ALL_ON: Self = Self(INDICATOR_MASK);

    /// Create from any byte; bits above bit 2 are dropped
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value & INDICATOR_MASK)
    }

    /// Masked bit pattern
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bar-graph pattern for a 10-bit level: its top three bits
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_level(level: u16) -> Self {
        Self::new((level >> 7) as u8)
    }

    /// State of one indicator within the pattern
    #[must_use]
    pub const fn state_of(self, indicator: Indicator) -> LedState {
        LedState::from_bit(self.0 & indicator.mask() != 0)
    }
}

impl From<u8> for IndicatorPattern {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IndicatorPattern {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u8:b}", self.0);
    }
}

/// ADC input channel selector (0-15)
///
/// Out-of-range values alias into range through the 4-bit mask rather than
/// being rejected, matching what the ADMUX field accepts.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AdcChannel(u8);

impl AdcChannel {
    /// Internal 1.1 V bandgap reference
    pub const BANDGAP: Self = Self(14);

    /// Ground
    pub const GND: Self = Self(15);

    /// Create a channel; only the low 4 bits are kept
    #[must_use]
    pub const fn new(channel: u8) -> Self {
        Self(channel & ADC_CHANNEL_MASK)
    }

    /// Channel number as written to ADMUX
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for AdcChannel {
    fn from(channel: u8) -> Self {
        Self::new(channel)
    }
}

impl fmt::Debug for AdcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdcChannel({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AdcChannel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ADC{}", self.0);
    }
}
