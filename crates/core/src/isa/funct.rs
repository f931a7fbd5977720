//! Function codes for the register-type class.
//!
//! Defines the function codes (bits 5:0) that select the operation when the
//! primary opcode is [`crate::isa::opcodes::OP_SPECIAL`].

/// Shift left logical by immediate amount (SLL).
pub const FN_SLL: u32 = 0x00;

/// Shift right logical by immediate amount (SRL).
pub const FN_SRL: u32 = 0x02;

/// Shift right arithmetic by immediate amount (SRA).
pub const FN_SRA: u32 = 0x03;

/// Shift left logical by register amount (SLLV).
pub const FN_SLLV: u32 = 0x04;

/// Shift right logical by register amount (SRLV).
pub const FN_SRLV: u32 = 0x06;

/// Shift right arithmetic by register amount (SRAV).
pub const FN_SRAV: u32 = 0x07;

/// Jump register (JR).
pub const FN_JR: u32 = 0x08;

/// Jump and link register (JALR).
pub const FN_JALR: u32 = 0x09;

/// System call (SYSCALL).
pub const FN_SYSCALL: u32 = 0x0c;

/// Move from HI (MFHI).
pub const FN_MFHI: u32 = 0x10;

/// Move to HI (MTHI).
pub const FN_MTHI: u32 = 0x11;

/// Move from LO (MFLO).
pub const FN_MFLO: u32 = 0x12;

/// Move to LO (MTLO).
pub const FN_MTLO: u32 = 0x13;

/// Multiply signed (MULT).
pub const FN_MULT: u32 = 0x18;

/// Multiply unsigned (MULTU).
pub const FN_MULTU: u32 = 0x19;

/// Divide signed (DIV).
pub const FN_DIV: u32 = 0x1a;

/// Divide unsigned (DIVU).
pub const FN_DIVU: u32 = 0x1b;

/// Add (ADD). No overflow trap is modeled; identical to ADDU here.
pub const FN_ADD: u32 = 0x20;

/// Add unsigned (ADDU).
pub const FN_ADDU: u32 = 0x21;

/// Subtract (SUB). No overflow trap is modeled; identical to SUBU here.
pub const FN_SUB: u32 = 0x22;

/// Subtract unsigned (SUBU).
pub const FN_SUBU: u32 = 0x23;

/// Bitwise AND (AND).
pub const FN_AND: u32 = 0x24;

/// Bitwise OR (OR).
pub const FN_OR: u32 = 0x25;

/// Bitwise XOR (XOR).
pub const FN_XOR: u32 = 0x26;

/// Bitwise NOR (NOR).
pub const FN_NOR: u32 = 0x27;

/// Set on less than, signed (SLT).
pub const FN_SLT: u32 = 0x2a;

/// Set on less than, unsigned (SLTU).
pub const FN_SLTU: u32 = 0x2b;
