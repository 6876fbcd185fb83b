//! Simulated Register File Tests
//!
//! Tests for the host-side register model the other suites rely on.
//! Run with: cargo test --test sim_tests

use peri_firmware::hal::registers::{Register, RegisterFile};
use peri_firmware::hal::sim::{RegisterWrite, SimRegisters, WRITE_LOG_CAPACITY};

#[test]
fn power_on_state() {
    let mut regs = SimRegisters::new();
    for reg in Register::ALL {
        if reg != Register::Pinc {
            assert_eq!(regs.read(reg), 0, "{reg}");
        }
    }
    // All lines are inputs and idle high
    assert_eq!(regs.read(Register::Pinc), 0xFF);
}

#[test]
fn pinc_reflects_outputs_and_inputs() {
    let mut regs = SimRegisters::new()
        .with(Register::Ddrc, 0b0000_1111)
        .with(Register::Portc, 0b0000_0101);
    regs.set_input_levels(0b1010_0000);

    assert_eq!(regs.read(Register::Pinc), 0b1010_0101);
}

#[test]
fn drive_input_wraps_line_number() {
    let mut regs = SimRegisters::new();
    regs.drive_input(11, false);
    assert_eq!(regs.read(Register::Pinc), 0b1111_0111);

    regs.drive_input(u8::MAX, false);
    assert_eq!(regs.read(Register::Pinc), 0b0111_0111);

    regs.drive_input(3, true);
    assert_eq!(regs.read(Register::Pinc), 0b0111_1111);
}

#[test]
fn pinc_write_toggles_portc() {
    let mut regs = SimRegisters::new().with(Register::Portc, 0b0000_0011);
    regs.write(Register::Pinc, 0b0000_0110);
    assert_eq!(regs.peek(Register::Portc), 0b0000_0101);
}

#[test]
fn result_registers_are_read_only() {
    let mut regs = SimRegisters::new().with(Register::Adcl, 0x12);
    regs.write(Register::Adcl, 0x34);
    regs.write(Register::Adch, 0x56);

    assert_eq!(regs.read(Register::Adcl), 0x12);
    assert_eq!(regs.read(Register::Adch), 0x00);
}

#[test]
fn start_without_enable_does_nothing() {
    let mut regs = SimRegisters::new();
    regs.write(Register::Adcsra, 1 << 6);

    assert!(!regs.is_converting());
    assert_eq!(regs.conversions_started(), 0);
    assert_eq!(regs.read(Register::Adcsra), 0);
}

#[test]
fn conversion_loads_result_on_completion() {
    let mut regs = SimRegisters::new();
    regs.set_conversion_result(0xEF, 0xBE);
    regs.set_conversion_latency(1);
    regs.write(Register::Adcsra, 0b1100_0111);

    assert!(regs.is_converting());
    assert_ne!(regs.read(Register::Adcsra) & (1 << 6), 0);
    assert_eq!(regs.peek(Register::Adcl), 0);

    assert_eq!(regs.read(Register::Adcsra) & (1 << 6), 0);
    assert_eq!(regs.read(Register::Adcl), 0xEF);
    assert_eq!(regs.read(Register::Adch), 0xBE);
}

#[test]
fn writing_one_to_adif_clears_it() {
    let mut regs = SimRegisters::new();
    regs.write(Register::Adcsra, 0b1100_0111);
    regs.read(Register::Adcsra);
    assert_ne!(regs.peek(Register::Adcsra) & (1 << 4), 0);

    regs.write(Register::Adcsra, 0b1001_0111);
    assert_eq!(regs.peek(Register::Adcsra) & (1 << 4), 0);
}

#[test]
fn modify_helpers() {
    let mut regs = SimRegisters::new().with(Register::Portc, 0b1010_1010);

    regs.set_bits(Register::Portc, 0b0000_0101);
    assert_eq!(regs.peek(Register::Portc), 0b1010_1111);

    regs.clear_bits(Register::Portc, 0b0000_1100);
    assert_eq!(regs.peek(Register::Portc), 0b1010_0011);

    regs.and_bits(Register::Portc, 0b0000_1111);
    assert_eq!(regs.peek(Register::Portc), 0b0000_0011);
}

fn set_direction<R: RegisterFile>(mut regs: R, value: u8) {
    regs.write(Register::Ddrc, value);
}

#[test]
fn register_file_through_mut_ref() {
    let mut regs = SimRegisters::new();
    set_direction(&mut regs, 0x42);
    assert_eq!(regs.peek(Register::Ddrc), 0x42);
}

#[test]
fn write_log_records_in_order() {
    let mut regs = SimRegisters::new();
    regs.write(Register::Ddrc, 1);
    regs.write(Register::Portc, 2);

    assert_eq!(
        regs.writes(),
        &[
            RegisterWrite {
                reg: Register::Ddrc,
                value: 1,
            },
            RegisterWrite {
                reg: Register::Portc,
                value: 2,
            },
        ]
    );
    assert_eq!(regs.writes_to(Register::Portc).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn write_log_overflow() {
    let mut regs = SimRegisters::new();
    for i in 0..=WRITE_LOG_CAPACITY {
        regs.write(Register::Portc, i as u8);
    }
    assert_eq!(regs.writes().len(), WRITE_LOG_CAPACITY);
    assert!(regs.log_overflowed());
    // The register still took the last write
    assert_eq!(regs.peek(Register::Portc), WRITE_LOG_CAPACITY as u8);

    regs.clear_writes();
    assert!(regs.writes().is_empty());
    assert!(!regs.log_overflowed());
}
