//! REGIMM condition selectors.
//!
//! Under the primary opcode [`crate::isa::opcodes::OP_REGIMM`] the `rt`
//! field selects the branch condition rather than naming a register.

/// Branch on less than zero (BLTZ).
pub const RT_BLTZ: u32 = 0x00;

/// Branch on greater than or equal to zero (BGEZ).
pub const RT_BGEZ: u32 = 0x01;

/// Branch on less than zero and link (BLTZAL). Links unconditionally.
pub const RT_BLTZAL: u32 = 0x10;

/// Branch on greater than or equal to zero and link (BGEZAL). Links unconditionally.
pub const RT_BGEZAL: u32 = 0x11;
