//! Instruction disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Register
//! operands use O32 ABI names; branch displacements are shown as the signed
//! byte offset actually added to `pc + 4`; unrecognized encodings render as
//! a `.word` directive so a trace never loses the raw bits.

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Byte displacement of a branch: the word offset shifted into bytes.
#[inline]
fn branch_bytes(offset: i32) -> i32 {
    offset << 2
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"addu $v0, $a0, $a1"`, or `".word 0x…"` for
/// encodings this core does not model.
pub fn disassemble(inst: u32) -> String {
    match decode(inst) {
        Instruction::Sll { rd, rt, shamt } => shift("sll", rd, rt, shamt),
        Instruction::Srl { rd, rt, shamt } => shift("srl", rd, rt, shamt),
        Instruction::Sra { rd, rt, shamt } => shift("sra", rd, rt, shamt),
        Instruction::Sllv { rd, rt, rs } => rtype("sllv", rd, rt, rs),
        Instruction::Srlv { rd, rt, rs } => rtype("srlv", rd, rt, rs),
        Instruction::Srav { rd, rt, rs } => rtype("srav", rd, rt, rs),

        Instruction::Jr { rs } => format!("jr ${}", reg_name(rs)),
        Instruction::Jalr { rd, rs } => format!("jalr ${}, ${}", reg_name(rd), reg_name(rs)),
        Instruction::Syscall => "syscall".to_string(),

        Instruction::Mfhi { rd } => format!("mfhi ${}", reg_name(rd)),
        Instruction::Mthi { rs } => format!("mthi ${}", reg_name(rs)),
        Instruction::Mflo { rd } => format!("mflo ${}", reg_name(rd)),
        Instruction::Mtlo { rs } => format!("mtlo ${}", reg_name(rs)),

        Instruction::Mult { rs, rt } => pair("mult", rs, rt),
        Instruction::Multu { rs, rt } => pair("multu", rs, rt),
        Instruction::Div { rs, rt } => pair("div", rs, rt),
        Instruction::Divu { rs, rt } => pair("divu", rs, rt),

        Instruction::Add { rd, rs, rt } => rtype("add", rd, rs, rt),
        Instruction::Addu { rd, rs, rt } => rtype("addu", rd, rs, rt),
        Instruction::Sub { rd, rs, rt } => rtype("sub", rd, rs, rt),
        Instruction::Subu { rd, rs, rt } => rtype("subu", rd, rs, rt),
        Instruction::And { rd, rs, rt } => rtype("and", rd, rs, rt),
        Instruction::Or { rd, rs, rt } => rtype("or", rd, rs, rt),
        Instruction::Xor { rd, rs, rt } => rtype("xor", rd, rs, rt),
        Instruction::Nor { rd, rs, rt } => rtype("nor", rd, rs, rt),
        Instruction::Slt { rd, rs, rt } => rtype("slt", rd, rs, rt),
        Instruction::Sltu { rd, rs, rt } => rtype("sltu", rd, rs, rt),

        Instruction::Addi { rt, rs, imm } => itype("addi", rt, rs, imm),
        Instruction::Addiu { rt, rs, imm } => itype("addiu", rt, rs, imm),
        Instruction::Andi { rt, rs, imm } => logical_imm("andi", rt, rs, imm),
        Instruction::Ori { rt, rs, imm } => logical_imm("ori", rt, rs, imm),
        Instruction::Xori { rt, rs, imm } => logical_imm("xori", rt, rs, imm),
        Instruction::Lui { rt, imm } => format!("lui ${}, {:#x}", reg_name(rt), imm),

        Instruction::Beq { rs, rt, offset } => format!(
            "beq ${}, ${}, {}",
            reg_name(rs),
            reg_name(rt),
            branch_bytes(offset)
        ),
        Instruction::Bne { rs, rt, offset } => format!(
            "bne ${}, ${}, {}",
            reg_name(rs),
            reg_name(rt),
            branch_bytes(offset)
        ),
        Instruction::Blez { rs, offset } => cond("blez", rs, offset),
        Instruction::Bgtz { rs, offset } => cond("bgtz", rs, offset),
        Instruction::Bltz { rs, offset } => cond("bltz", rs, offset),
        Instruction::Bgez { rs, offset } => cond("bgez", rs, offset),
        Instruction::Bltzal { rs, offset } => cond("bltzal", rs, offset),
        Instruction::Bgezal { rs, offset } => cond("bgezal", rs, offset),

        Instruction::J { target } => format!("j {:#x}", target << 2),
        Instruction::Jal { target } => format!("jal {:#x}", target << 2),

        Instruction::Lb { rt, base, offset } => mem("lb", rt, base, offset),
        Instruction::Lbu { rt, base, offset } => mem("lbu", rt, base, offset),
        Instruction::Lh { rt, base, offset } => mem("lh", rt, base, offset),
        Instruction::Lhu { rt, base, offset } => mem("lhu", rt, base, offset),
        Instruction::Lw { rt, base, offset } => mem("lw", rt, base, offset),
        Instruction::Sb { rt, base, offset } => mem("sb", rt, base, offset),
        Instruction::Sh { rt, base, offset } => mem("sh", rt, base, offset),
        Instruction::Sw { rt, base, offset } => mem("sw", rt, base, offset),

        Instruction::Invalid(_) => format!(".word {inst:#010x}"),
    }
}

/// `mnemonic $rd, $rs, $rt` (three-register form).
fn rtype(mnemonic: &str, rd: usize, a: usize, b: usize) -> String {
    format!("{mnemonic} ${}, ${}, ${}", reg_name(rd), reg_name(a), reg_name(b))
}

/// `mnemonic $rd, $rt, shamt` (constant-shift form).
fn shift(mnemonic: &str, rd: usize, rt: usize, shamt: u32) -> String {
    format!("{mnemonic} ${}, ${}, {shamt}", reg_name(rd), reg_name(rt))
}

/// `mnemonic $rs, $rt` (HI/LO-writing two-register form).
fn pair(mnemonic: &str, rs: usize, rt: usize) -> String {
    format!("{mnemonic} ${}, ${}", reg_name(rs), reg_name(rt))
}

/// `mnemonic $rt, $rs, imm` with a signed immediate.
fn itype(mnemonic: &str, rt: usize, rs: usize, imm: i32) -> String {
    format!("{mnemonic} ${}, ${}, {imm}", reg_name(rt), reg_name(rs))
}

/// `mnemonic $rt, $rs, imm` with a zero-extended immediate in hex.
fn logical_imm(mnemonic: &str, rt: usize, rs: usize, imm: u32) -> String {
    format!("{mnemonic} ${}, ${}, {imm:#x}", reg_name(rt), reg_name(rs))
}

/// `mnemonic $rs, offset` (single-register branch form).
fn cond(mnemonic: &str, rs: usize, offset: i32) -> String {
    format!("{mnemonic} ${}, {}", reg_name(rs), branch_bytes(offset))
}

/// `mnemonic $rt, offset($base)` (load/store form).
fn mem(mnemonic: &str, rt: usize, base: usize, offset: i32) -> String {
    format!("{mnemonic} ${}, {offset}(${})", reg_name(rt), reg_name(base))
}
