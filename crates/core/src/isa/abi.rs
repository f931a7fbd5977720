//! MIPS O32 ABI register names and architected register roles.
//!
//! Defines the conventional register names used by the disassembler and the
//! register indices the execution semantics reference directly: the link
//! register written by call-style jumps and the `$v0` register carrying the
//! system-call service number.

/// Register 2 (`$v0`): holds the service number on SYSCALL.
pub const REG_V0: usize = 2;

/// Register 31 (`$ra`): the link register written by JAL, BLTZAL, and BGEZAL.
pub const REG_RA: usize = 31;

/// Service number in `$v0` that requests the modeled "exit" system call.
pub const SERVICE_EXIT: u32 = 0x0a;

/// O32 ABI names for registers 0-31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the O32 name for a register index, without the `$` sigil.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r??")
}
