//! Port C Peripheral Demo
//!
//! Entry point for the ATmega328P board. Sweeps the indicators once, then
//! shows the top three bits of ADC channel 0 on them. While the auxiliary
//! input is held low only the red indicator is lit.
//!
//! Build with: cargo build --release --target avr-unknown-gnu-atmega328 -Z build-std=core --no-default-features --features embedded

#![no_std]
#![no_main]

use panic_halt as _;

use peri_firmware::prelude::*;

/// Channel shown on the indicators
const SAMPLE_CHANNEL: u8 = 0;

/// Main entry point
#[avr_device::entry]
fn main() -> ! {
    let regs = Mmio::take().unwrap();
    let shared = SharedPeripheral::new(PeripheralDriver::new(regs));
    shared.init_peripheral();

    let mut red = IndicatorPin::new(&shared, Indicator::Red);
    let aux = AuxInput::new(&shared);

    // Lamp test
    for indicator in Indicator::ALL {
        shared.set_indicator(indicator, LedState::On);
        delay_ms(200);
        shared.set_indicator(indicator, LedState::Off);
    }

    loop {
        if aux.is_pressed() {
            shared.set_led_value(0);
            red.on();
        } else {
            let level = shared.read_adc(SAMPLE_CHANNEL);
            shared.set_pattern(IndicatorPattern::from_level(level));
        }
        delay_ms(50);
    }
}

fn delay_ms(ms: u16) {
    for _ in 0..ms {
        avr_device::asm::delay_cycles(CYCLES_PER_MS);
    }
}
