//! Shared Peripheral Tests
//!
//! Tests for the critical-section wrapper and the embedded-hal pin adapters.
//! Run with: cargo test --test shared_tests

use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
use peri_firmware::drivers::indicator::{AuxInput, IndicatorPin};
use peri_firmware::hal::registers::Register;
use peri_firmware::hal::sim::SimRegisters;
use peri_firmware::types::{Indicator, IndicatorPattern, LedState};
use peri_firmware::{PeripheralDriver, SharedPeripheral};

fn shared() -> SharedPeripheral<SimRegisters> {
    let shared = SharedPeripheral::new(PeripheralDriver::new(SimRegisters::new()));
    shared.init_peripheral();
    shared
}

fn portc(shared: &SharedPeripheral<SimRegisters>) -> u8 {
    shared.with(|p| p.registers().peek(Register::Portc))
}

// =============================================================================
// SharedPeripheral Tests
// =============================================================================

#[test]
fn shared_init_matches_driver() {
    let shared = shared();
    let driver = shared.into_inner();
    assert_eq!(driver.registers().peek(Register::Ddrc), 0b0000_0111);
    assert_eq!(driver.registers().peek(Register::Portc), 0b0000_1000);
}

#[test]
fn shared_set_led_and_value() {
    let shared = shared();
    shared.set_led(0, 1);
    shared.set_led(9, 1);
    assert_eq!(shared.pattern().bits(), 0b001);

    shared.set_led_value(0b110);
    assert_eq!(shared.pattern().bits(), 0b110);
    assert_eq!(shared.indicator(Indicator::Red), LedState::Off);

    shared.set_pattern(IndicatorPattern::OFF);
    assert_eq!(portc(&shared), 0b0000_1000);
}

#[test]
fn shared_read_adc() {
    let shared = shared();
    shared.with(|p| p.registers_mut().set_conversion_result(0x99, 0x02));
    assert_eq!(shared.read_adc(1), 0x0299);
}

#[test]
fn shared_bounded_read() {
    let shared = shared();
    shared.with(|p| p.registers_mut().stall_conversions(true));
    assert!(shared.read_adc_bounded(1, 8).is_err());
}

#[test]
fn shared_aux_input() {
    let shared = shared();
    assert!(!shared.aux_is_low());
    shared.with(|p| p.registers_mut().drive_input(3, false));
    assert!(shared.aux_is_low());
}

static STATIC_PERIPHERAL: SharedPeripheral<SimRegisters> =
    SharedPeripheral::new(PeripheralDriver::new(SimRegisters::new()));

#[test]
fn shared_peripheral_in_static() {
    STATIC_PERIPHERAL.init_peripheral();
    STATIC_PERIPHERAL.set_indicator(Indicator::Green, LedState::On);
    assert_eq!(STATIC_PERIPHERAL.indicator(Indicator::Green), LedState::On);
}

#[test]
fn shared_across_threads() {
    let shared = shared();
    std::thread::scope(|s| {
        for indicator in Indicator::ALL {
            let shared = &shared;
            s.spawn(move || {
                for _ in 0..100 {
                    shared.set_indicator(indicator, LedState::On);
                    shared.set_indicator(indicator, LedState::Off);
                }
                shared.set_indicator(indicator, LedState::On);
            });
        }
    });
    assert_eq!(shared.pattern(), IndicatorPattern::ALL_ON);
    assert_eq!(portc(&shared) & !0b111, 0b0000_1000);
}

// =============================================================================
// IndicatorPin Tests
// =============================================================================

#[test]
fn indicator_pin_output() {
    let shared = shared();
    let mut pin = IndicatorPin::new(&shared, Indicator::Yellow);

    pin.set_high().unwrap();
    assert_eq!(portc(&shared), 0b0000_1010);
    assert!(pin.is_set_high().unwrap());

    pin.set_low().unwrap();
    assert_eq!(portc(&shared), 0b0000_1000);
    assert!(pin.is_set_low().unwrap());
}

#[test]
fn indicator_pin_toggle() {
    let shared = shared();
    let mut pin = IndicatorPin::new(&shared, Indicator::Green);

    pin.toggle().unwrap();
    assert_eq!(pin.state(), LedState::On);
    pin.toggle().unwrap();
    assert_eq!(pin.state(), LedState::Off);
}

#[test]
fn indicator_pins_coexist() {
    let shared = shared();
    let mut red = IndicatorPin::new(&shared, Indicator::Red);
    let mut green = IndicatorPin::new(&shared, Indicator::Green);

    red.on();
    green.on();
    assert_eq!(shared.pattern().bits(), 0b101);

    red.off();
    assert_eq!(shared.pattern().bits(), 0b100);
    assert_eq!(green.indicator(), Indicator::Green);
}

#[test]
fn indicator_pin_sees_group_writes() {
    let shared = shared();
    let mut yellow = IndicatorPin::new(&shared, Indicator::Yellow);

    shared.set_led_value(0b010);
    assert!(yellow.is_set_high().unwrap());
    shared.set_led_value(0b101);
    assert!(yellow.is_set_low().unwrap());
}

// =============================================================================
// AuxInput Tests
// =============================================================================

#[test]
fn aux_input_pin() {
    let shared = shared();
    let mut aux = AuxInput::new(&shared);

    assert!(aux.is_high().unwrap());
    assert!(!aux.is_pressed());

    shared.with(|p| p.registers_mut().drive_input(3, false));
    assert!(aux.is_low().unwrap());
    assert!(aux.is_pressed());
}
