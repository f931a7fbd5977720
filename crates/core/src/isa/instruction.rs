//! Instruction bit-field extraction and decoded variants.
//!
//! MIPS-I uses one fixed-width field layout for all encodings:
//! `op = bits[31:26]`, `rs = bits[25:21]`, `rt = bits[20:16]`,
//! `rd = bits[15:11]`, `shamt = bits[10:6]`, `funct = bits[5:0]`,
//! `imm16 = bits[15:0]`, `target26 = bits[25:0]`. Extraction is pure
//! shift-and-mask; out-of-range fields cannot occur.

use crate::common::error::Fault;

/// Bit mask for 5-bit register and shift-amount fields.
pub const FIELD5_MASK: u32 = 0x1f;

/// Bit mask for 6-bit opcode and function-code fields.
pub const FIELD6_MASK: u32 = 0x3f;

/// Bit mask for the 16-bit immediate field.
pub const IMM16_MASK: u32 = 0xffff;

/// Bit mask for the 26-bit jump target field.
pub const TARGET26_MASK: u32 = 0x03ff_ffff;

/// Trait for extracting instruction fields from an encoded word.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31:26).
    fn op(&self) -> u32;
    /// Extracts the first source register index (bits 25:21).
    fn rs(&self) -> usize;
    /// Extracts the target register index (bits 20:16).
    fn rt(&self) -> usize;
    /// Extracts the destination register index (bits 15:11).
    fn rd(&self) -> usize;
    /// Extracts the shift amount (bits 10:6).
    fn shamt(&self) -> u32;
    /// Extracts the function code (bits 5:0).
    fn funct(&self) -> u32;
    /// Extracts the 16-bit immediate (bits 15:0).
    fn imm16(&self) -> u16;
    /// Extracts the 26-bit jump target (bits 25:0).
    fn target26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn op(&self) -> u32 {
        self >> 26
    }

    #[inline]
    fn rs(&self) -> usize {
        ((self >> 21) & FIELD5_MASK) as usize
    }

    #[inline]
    fn rt(&self) -> usize {
        ((self >> 16) & FIELD5_MASK) as usize
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> 11) & FIELD5_MASK) as usize
    }

    #[inline]
    fn shamt(&self) -> u32 {
        (self >> 6) & FIELD5_MASK
    }

    #[inline]
    fn funct(&self) -> u32 {
        self & FIELD6_MASK
    }

    #[inline]
    fn imm16(&self) -> u16 {
        (self & IMM16_MASK) as u16
    }

    #[inline]
    fn target26(&self) -> u32 {
        self & TARGET26_MASK
    }
}

/// One decoded instruction, tagged per operation.
///
/// Immediates are already extended the way the instruction's semantics
/// require: `imm: i32` fields are sign-extended, `imm: u32` fields are
/// zero-extended, and [`Instruction::Lui`] keeps the raw 16-bit value it
/// will place in the upper half. Branch `offset` fields hold the
/// sign-extended word displacement before the architectural `<< 2`.
///
/// Unrecognized encodings and illegal operand combinations decode to
/// [`Instruction::Invalid`]; the dispatcher turns that into a diagnostic
/// plus the default PC advance rather than refusing to step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Shift left logical: `regs[rd] = regs[rt] << shamt`.
    Sll {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Shift amount from the instruction word.
        shamt: u32,
    },
    /// Shift right logical: `regs[rd] = regs[rt] >> shamt`.
    Srl {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Shift amount from the instruction word.
        shamt: u32,
    },
    /// Shift right arithmetic: `regs[rd] = (regs[rt] as i32) >> shamt`.
    Sra {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Shift amount from the instruction word.
        shamt: u32,
    },
    /// Shift left logical variable: amount is the low 5 bits of `regs[rs]`.
    Sllv {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Register supplying the shift amount.
        rs: usize,
    },
    /// Shift right logical variable: amount is the low 5 bits of `regs[rs]`.
    Srlv {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Register supplying the shift amount.
        rs: usize,
    },
    /// Shift right arithmetic variable: amount is the low 5 bits of `regs[rs]`.
    Srav {
        /// Destination register.
        rd: usize,
        /// Source register.
        rt: usize,
        /// Register supplying the shift amount.
        rs: usize,
    },
    /// Jump register: `pc = regs[rs]`.
    Jr {
        /// Register holding the jump target.
        rs: usize,
    },
    /// Jump and link register: `regs[rd] = pc + 4`, then `pc = regs[rs]`.
    Jalr {
        /// Link register receiving the return address.
        rd: usize,
        /// Register holding the jump target.
        rs: usize,
    },
    /// System call; service number taken from `regs[2]`.
    Syscall,
    /// Move from HI: `regs[rd] = hi`.
    Mfhi {
        /// Destination register.
        rd: usize,
    },
    /// Move to HI: `hi = regs[rs]`.
    Mthi {
        /// Source register.
        rs: usize,
    },
    /// Move from LO: `regs[rd] = lo`.
    Mflo {
        /// Destination register.
        rd: usize,
    },
    /// Move to LO: `lo = regs[rs]`.
    Mtlo {
        /// Source register.
        rs: usize,
    },
    /// Signed 32x32 to 64-bit multiply into HI/LO.
    Mult {
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Unsigned 32x32 to 64-bit multiply into HI/LO.
    Multu {
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Signed divide: `lo = rs / rt`, `hi = rs % rt`, truncating toward zero.
    Div {
        /// Dividend register.
        rs: usize,
        /// Divisor register.
        rt: usize,
    },
    /// Unsigned divide: `lo = rs / rt`, `hi = rs % rt`.
    Divu {
        /// Dividend register.
        rs: usize,
        /// Divisor register.
        rt: usize,
    },
    /// Wrapping add: `regs[rd] = regs[rs] + regs[rt]`. No overflow trap.
    Add {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Wrapping add unsigned; identical semantics to `Add` here.
    Addu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Wrapping subtract: `regs[rd] = regs[rs] - regs[rt]`. No overflow trap.
    Sub {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Wrapping subtract unsigned; identical semantics to `Sub` here.
    Subu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Bitwise AND.
    And {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Bitwise OR.
    Or {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Bitwise XOR.
    Xor {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Bitwise NOR: `regs[rd] = !(regs[rs] | regs[rt])`.
    Nor {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Set on less than, signed compare: result is 1 or 0.
    Slt {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Set on less than, unsigned compare: result is 1 or 0.
    Sltu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Add immediate: `regs[rt] = regs[rs] + imm`. No overflow trap.
    Addi {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// Add immediate unsigned; identical semantics to `Addi` here.
    Addiu {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// AND immediate: `regs[rt] = regs[rs] & imm`.
    Andi {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u32,
    },
    /// OR immediate: `regs[rt] = regs[rs] | imm`.
    Ori {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u32,
    },
    /// XOR immediate: `regs[rt] = regs[rs] ^ imm`.
    Xori {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u32,
    },
    /// Load upper immediate: `regs[rt] = imm << 16`. Legal only with `rs == 0`.
    Lui {
        /// Destination register.
        rt: usize,
        /// Raw 16-bit immediate placed in the upper half.
        imm: u16,
    },
    /// Branch if `regs[rs] == regs[rt]`.
    Beq {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Branch if `regs[rs] != regs[rt]`.
    Bne {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Branch if `regs[rs] <= 0` (signed).
    Blez {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Branch if `regs[rs] > 0` (signed).
    Bgtz {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Branch if `regs[rs] < 0` (signed).
    Bltz {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Branch if `regs[rs] >= 0` (signed).
    Bgez {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// As `Bltz`, and writes `regs[31] = pc + 4` whether or not taken.
    Bltzal {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// As `Bgez`, and writes `regs[31] = pc + 4` whether or not taken.
    Bgezal {
        /// Tested register.
        rs: usize,
        /// Sign-extended word displacement (before `<< 2`).
        offset: i32,
    },
    /// Jump within the current 256 MiB region.
    J {
        /// 26-bit word-index target.
        target: u32,
    },
    /// Jump and link: as `J`, plus `regs[31] = pc + 4`.
    Jal {
        /// 26-bit word-index target.
        target: u32,
    },
    /// Load byte, sign-extended into `regs[rt]`.
    Lb {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Load byte, zero-extended into `regs[rt]`.
    Lbu {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Load halfword, sign-extended into `regs[rt]`.
    Lh {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Load halfword, zero-extended into `regs[rt]`.
    Lhu {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Load word into `regs[rt]`.
    Lw {
        /// Destination register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Store the low byte of `regs[rt]` (read-modify-write of the word).
    Sb {
        /// Source register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Store the low halfword of `regs[rt]` (read-modify-write of the word).
    Sh {
        /// Source register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Store `regs[rt]` as a whole word.
    Sw {
        /// Source register.
        rt: usize,
        /// Base address register.
        base: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Unrecognized or illegal encoding; carries the diagnostic to report.
    Invalid(Fault),
}
