//! System call tests.
//!
//! The exit service halts the machine with the PC parked on the syscall
//! word; every other service number is a plain fall-through.

use mipsim_core::Control;

use crate::common::builder::instruction as asm;
use crate::common::harness::{DEFAULT_PC, TestContext};

#[test]
fn exit_service_halts_with_pc_on_the_syscall() {
    let mut ctx = TestContext::new().with_reg(2, 0x0a);
    let result = ctx.exec(asm::syscall());
    assert_eq!(result.control, Control::Halt);
    assert_eq!(ctx.state.pc, DEFAULT_PC);
    assert!(!ctx.running);
    assert_eq!(result.fault, None);
}

#[test]
fn other_service_numbers_fall_through() {
    let mut ctx = TestContext::new().with_reg(2, 1);
    let result = ctx.exec(asm::syscall());
    assert_eq!(result.control, Control::Continue);
    assert_eq!(ctx.state.pc, DEFAULT_PC + 4);
    assert!(ctx.running);
    assert_eq!(result.fault, None);
}

#[test]
fn zero_service_number_is_not_exit() {
    let mut ctx = TestContext::new();
    let result = ctx.exec(asm::syscall());
    assert_eq!(result.control, Control::Continue);
    assert_eq!(ctx.state.pc, DEFAULT_PC + 4);
}
