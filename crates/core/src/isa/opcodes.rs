//! MIPS-I primary opcodes.
//!
//! Defines the major opcodes (bits 31:26) for every supported instruction
//! class. Opcode 0 selects the register-type class, further decoded by the
//! function code (see [`crate::isa::funct`]); opcode 1 selects the REGIMM
//! branches, further decoded by `rt` (see [`crate::isa::regimm`]).

/// Register-type class (shifts, arithmetic, logic, HI/LO moves, JR/JALR, SYSCALL).
pub const OP_SPECIAL: u32 = 0x00;

/// REGIMM branch class (BLTZ, BGEZ, BLTZAL, BGEZAL).
pub const OP_REGIMM: u32 = 0x01;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Branch on less than or equal to zero (BLEZ).
pub const OP_BLEZ: u32 = 0x06;

/// Branch on greater than zero (BGTZ).
pub const OP_BGTZ: u32 = 0x07;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// AND immediate (ANDI).
pub const OP_ANDI: u32 = 0x0c;

/// OR immediate (ORI).
pub const OP_ORI: u32 = 0x0d;

/// XOR immediate (XORI).
pub const OP_XORI: u32 = 0x0e;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0f;

/// Load byte, sign-extended (LB).
pub const OP_LB: u32 = 0x20;

/// Load halfword, sign-extended (LH).
pub const OP_LH: u32 = 0x21;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Load byte, zero-extended (LBU).
pub const OP_LBU: u32 = 0x24;

/// Load halfword, zero-extended (LHU).
pub const OP_LHU: u32 = 0x25;

/// Store byte (SB).
pub const OP_SB: u32 = 0x28;

/// Store halfword (SH).
pub const OP_SH: u32 = 0x29;

/// Store word (SW).
pub const OP_SW: u32 = 0x2b;
