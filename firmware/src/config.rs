//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the ATmega328P port C
//! wiring and the ADC. Bit positions and default patterns are centralized
//! here; register access itself goes through the PAC.

/// CPU clock frequency (16 MHz crystal)
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

/// CPU cycles per millisecond
pub const CYCLES_PER_MS: u32 = SYSTEM_CLOCK_HZ / 1_000;

/// ADC clock prescaler selected by `ADPS2:0 = 0b111`
pub const ADC_PRESCALER: u32 = 128;

/// ADC clock frequency after prescaling
pub const ADC_CLOCK_HZ: u32 = SYSTEM_CLOCK_HZ / ADC_PRESCALER;

/// ADC resolution in bits
pub const ADC_RESOLUTION_BITS: u8 = 10;

/// Largest value a 10-bit conversion can produce
pub const ADC_MAX: u16 = (1 << ADC_RESOLUTION_BITS) - 1;

/// ADC reference voltage in millivolts (AVcc)
pub const ADC_VREF_MV: u32 = 5_000;

/// Number of selectable ADC input channels
pub const ADC_CHANNEL_COUNT: u8 = 16;

/// Mask applied to a channel number before it is written to ADMUX
pub const ADC_CHANNEL_MASK: u8 = 0b0000_1111;

/// Bits of PORTC owned by the indicator group
pub const INDICATOR_MASK: u8 = 0b0000_0111;

/// Port C line configured as a pulled-up input by init
pub const AUX_INPUT_BIT: u8 = 3;

/// Port C line configured as a floating input by init
pub const FLOAT_INPUT_BIT: u8 = 4;

/// ADMUX and ADCSRA bit positions
pub mod adc_bits {
    //! Bit numbers inside the ADC control registers

    /// Reference selection bit 1
    pub const REFS1: u8 = 7;

    /// Reference selection bit 0
    pub const REFS0: u8 = 6;

    /// Left-adjust result
    pub const ADLAR: u8 = 5;

    /// ADC enable
    pub const ADEN: u8 = 7;

    /// Start conversion; reads as one while a conversion is in progress
    pub const ADSC: u8 = 6;

    /// Auto trigger enable
    pub const ADATE: u8 = 5;

    /// Interrupt flag
    pub const ADIF: u8 = 4;

    /// Interrupt enable
    pub const ADIE: u8 = 3;

    /// Prescaler select bit 2
    pub const ADPS2: u8 = 2;

    /// Prescaler select bit 1
    pub const ADPS1: u8 = 1;

    /// Prescaler select bit 0
    pub const ADPS0: u8 = 0;
}

/// Port C masks applied by peripheral initialization, in order
pub mod init {
    //! Read-modify-write patterns for `init_peripheral`

    /// OR into DDRC: PC0..PC3 as outputs
    pub const DDR_OUTPUTS: u8 = 0b0000_1111;

    /// AND into PORTC: indicators off
    pub const PORT_INDICATORS_OFF: u8 = 0b1111_1000;

    /// AND into DDRC: PC3 and PC4 back to inputs
    pub const DDR_INPUTS: u8 = 0b1110_0111;

    /// OR into PORTC: pull-up on PC3
    pub const PORT_AUX_PULLUP: u8 = 0b0000_1000;

    /// AND into PORTC: no pull-up on PC4
    pub const PORT_FLOAT_LOW: u8 = 0b1110_1111;
}

/// Pin assignments for GPIO
pub mod pins {
    //! Port C pin assignments matching the board wiring

    /// Red indicator LED
    pub const LED_RED: &str = "PC0";

    /// Yellow indicator LED
    pub const LED_YELLOW: &str = "PC1";

    /// Green indicator LED
    pub const LED_GREEN: &str = "PC2";

    /// Auxiliary input, active low with internal pull-up
    pub const AUX_IN: &str = "PC3";

    /// Floating input, no pull-up
    pub const FLOAT_IN: &str = "PC4";
}
