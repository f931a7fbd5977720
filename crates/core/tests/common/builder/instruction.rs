//! Instruction word encoders.
//!
//! Assembles raw 32-bit encodings from fields, one helper per mnemonic the
//! core models, over four format-level primitives. Signed immediates are
//! taken as `i16` and stored as their 16-bit two's-complement pattern.

use mipsim_core::isa::{funct, opcodes, regimm};

/// Assembles a register-type (opcode 0) encoding.
pub fn encode_r(fun: u32, rs: usize, rt: usize, rd: usize, shamt: u32) -> u32 {
    ((rs as u32) << 21) | ((rt as u32) << 16) | ((rd as u32) << 11) | (shamt << 6) | fun
}

/// Assembles an immediate-type encoding with a raw 16-bit immediate.
pub fn encode_i(op: u32, rs: usize, rt: usize, imm: u16) -> u32 {
    (op << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | u32::from(imm)
}

/// Assembles a jump-type encoding with a 26-bit word-index target.
pub fn encode_j(op: u32, target: u32) -> u32 {
    (op << 26) | (target & 0x03ff_ffff)
}

/// Assembles a REGIMM encoding; `cond` is the `rt` condition selector.
pub fn encode_regimm(cond: u32, rs: usize, imm: i16) -> u32 {
    (opcodes::OP_REGIMM << 26) | ((rs as u32) << 21) | (cond << 16) | u32::from(imm as u16)
}

// ── Register-type class ───────────────────────────────────────────────

/// `sll rd, rt, shamt`
pub fn sll(rd: usize, rt: usize, shamt: u32) -> u32 {
    encode_r(funct::FN_SLL, 0, rt, rd, shamt)
}
/// `srl rd, rt, shamt`
pub fn srl(rd: usize, rt: usize, shamt: u32) -> u32 {
    encode_r(funct::FN_SRL, 0, rt, rd, shamt)
}
/// `sra rd, rt, shamt`
pub fn sra(rd: usize, rt: usize, shamt: u32) -> u32 {
    encode_r(funct::FN_SRA, 0, rt, rd, shamt)
}
/// `sllv rd, rt, rs`
pub fn sllv(rd: usize, rt: usize, rs: usize) -> u32 {
    encode_r(funct::FN_SLLV, rs, rt, rd, 0)
}
/// `srlv rd, rt, rs`
pub fn srlv(rd: usize, rt: usize, rs: usize) -> u32 {
    encode_r(funct::FN_SRLV, rs, rt, rd, 0)
}
/// `srav rd, rt, rs`
pub fn srav(rd: usize, rt: usize, rs: usize) -> u32 {
    encode_r(funct::FN_SRAV, rs, rt, rd, 0)
}
/// `jr rs`
pub fn jr(rs: usize) -> u32 {
    encode_r(funct::FN_JR, rs, 0, 0, 0)
}
/// `jalr rd, rs`
pub fn jalr(rd: usize, rs: usize) -> u32 {
    encode_r(funct::FN_JALR, rs, 0, rd, 0)
}
/// `syscall`
pub fn syscall() -> u32 {
    encode_r(funct::FN_SYSCALL, 0, 0, 0, 0)
}
/// `mfhi rd`
pub fn mfhi(rd: usize) -> u32 {
    encode_r(funct::FN_MFHI, 0, 0, rd, 0)
}
/// `mthi rs`
pub fn mthi(rs: usize) -> u32 {
    encode_r(funct::FN_MTHI, rs, 0, 0, 0)
}
/// `mflo rd`
pub fn mflo(rd: usize) -> u32 {
    encode_r(funct::FN_MFLO, 0, 0, rd, 0)
}
/// `mtlo rs`
pub fn mtlo(rs: usize) -> u32 {
    encode_r(funct::FN_MTLO, rs, 0, 0, 0)
}
/// `mult rs, rt`
pub fn mult(rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_MULT, rs, rt, 0, 0)
}
/// `multu rs, rt`
pub fn multu(rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_MULTU, rs, rt, 0, 0)
}
/// `div rs, rt`
pub fn div(rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_DIV, rs, rt, 0, 0)
}
/// `divu rs, rt`
pub fn divu(rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_DIVU, rs, rt, 0, 0)
}
/// `add rd, rs, rt`
pub fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_ADD, rs, rt, rd, 0)
}
/// `addu rd, rs, rt`
pub fn addu(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_ADDU, rs, rt, rd, 0)
}
/// `sub rd, rs, rt`
pub fn sub(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_SUB, rs, rt, rd, 0)
}
/// `subu rd, rs, rt`
pub fn subu(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_SUBU, rs, rt, rd, 0)
}
/// `and rd, rs, rt`
pub fn and(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_AND, rs, rt, rd, 0)
}
/// `or rd, rs, rt`
pub fn or(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_OR, rs, rt, rd, 0)
}
/// `xor rd, rs, rt`
pub fn xor(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_XOR, rs, rt, rd, 0)
}
/// `nor rd, rs, rt`
pub fn nor(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_NOR, rs, rt, rd, 0)
}
/// `slt rd, rs, rt`
pub fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_SLT, rs, rt, rd, 0)
}
/// `sltu rd, rs, rt`
pub fn sltu(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::FN_SLTU, rs, rt, rd, 0)
}

// ── Immediate class ───────────────────────────────────────────────────

/// `addi rt, rs, imm`
pub fn addi(rt: usize, rs: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_ADDI, rs, rt, imm as u16)
}
/// `addiu rt, rs, imm`
pub fn addiu(rt: usize, rs: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_ADDIU, rs, rt, imm as u16)
}
/// `andi rt, rs, imm`
pub fn andi(rt: usize, rs: usize, imm: u16) -> u32 {
    encode_i(opcodes::OP_ANDI, rs, rt, imm)
}
/// `ori rt, rs, imm`
pub fn ori(rt: usize, rs: usize, imm: u16) -> u32 {
    encode_i(opcodes::OP_ORI, rs, rt, imm)
}
/// `xori rt, rs, imm`
pub fn xori(rt: usize, rs: usize, imm: u16) -> u32 {
    encode_i(opcodes::OP_XORI, rs, rt, imm)
}
/// `lui rt, imm`
pub fn lui(rt: usize, imm: u16) -> u32 {
    encode_i(opcodes::OP_LUI, 0, rt, imm)
}

// ── Branch class ──────────────────────────────────────────────────────

/// `beq rs, rt, imm` (word displacement)
pub fn beq(rs: usize, rt: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_BEQ, rs, rt, imm as u16)
}
/// `bne rs, rt, imm` (word displacement)
pub fn bne(rs: usize, rt: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_BNE, rs, rt, imm as u16)
}
/// `blez rs, imm` (word displacement)
pub fn blez(rs: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_BLEZ, rs, 0, imm as u16)
}
/// `bgtz rs, imm` (word displacement)
pub fn bgtz(rs: usize, imm: i16) -> u32 {
    encode_i(opcodes::OP_BGTZ, rs, 0, imm as u16)
}
/// `bltz rs, imm` (word displacement)
pub fn bltz(rs: usize, imm: i16) -> u32 {
    encode_regimm(regimm::RT_BLTZ, rs, imm)
}
/// `bgez rs, imm` (word displacement)
pub fn bgez(rs: usize, imm: i16) -> u32 {
    encode_regimm(regimm::RT_BGEZ, rs, imm)
}
/// `bltzal rs, imm` (word displacement)
pub fn bltzal(rs: usize, imm: i16) -> u32 {
    encode_regimm(regimm::RT_BLTZAL, rs, imm)
}
/// `bgezal rs, imm` (word displacement)
pub fn bgezal(rs: usize, imm: i16) -> u32 {
    encode_regimm(regimm::RT_BGEZAL, rs, imm)
}

// ── Jump class ────────────────────────────────────────────────────────

/// `j target` (26-bit word index)
pub fn j(target: u32) -> u32 {
    encode_j(opcodes::OP_J, target)
}
/// `jal target` (26-bit word index)
pub fn jal(target: u32) -> u32 {
    encode_j(opcodes::OP_JAL, target)
}

// ── Load/store class ──────────────────────────────────────────────────

/// `lb rt, offset(base)`
pub fn lb(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_LB, base, rt, offset as u16)
}
/// `lbu rt, offset(base)`
pub fn lbu(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_LBU, base, rt, offset as u16)
}
/// `lh rt, offset(base)`
pub fn lh(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_LH, base, rt, offset as u16)
}
/// `lhu rt, offset(base)`
pub fn lhu(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_LHU, base, rt, offset as u16)
}
/// `lw rt, offset(base)`
pub fn lw(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_LW, base, rt, offset as u16)
}
/// `sb rt, offset(base)`
pub fn sb(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_SB, base, rt, offset as u16)
}
/// `sh rt, offset(base)`
pub fn sh(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_SH, base, rt, offset as u16)
}
/// `sw rt, offset(base)`
pub fn sw(rt: usize, base: usize, offset: i16) -> u32 {
    encode_i(opcodes::OP_SW, base, rt, offset as u16)
}
