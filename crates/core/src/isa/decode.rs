//! Instruction decoder.
//!
//! Maps a raw 32-bit instruction word to its tagged [`Instruction`] variant
//! and provides the sign/zero extension helpers used both here and by the
//! load path. Extension is explicit defined-behavior arithmetic (narrowing
//! casts through the signed type of the same width); the core never
//! reinterprets bit patterns through type punning.
//!
//! Decoding performs the encoding-legality checks that are visible in the
//! bit fields alone: unrecognized primary opcodes, unrecognized function
//! codes under opcode 0, unrecognized REGIMM condition selectors, LUI with
//! nonzero `rs`, and BLEZ/BGTZ with nonzero `rt` all decode to
//! [`Instruction::Invalid`]. Value-dependent conditions (divide by zero)
//! are the dispatcher's to detect.

use crate::common::error::Fault;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::{funct, opcodes, regimm};

/// Sign-extends a 16-bit value to 32 bits by replicating bit 15.
///
/// Used for arithmetic immediates, branch displacements, load/store offsets,
/// and loaded halfword values. Total; implemented as a defined narrowing
/// cast chain, never as pointer reinterpretation.
#[inline]
pub fn sign_extend_16(value: u16) -> u32 {
    value as i16 as i32 as u32
}

/// Sign-extends an 8-bit value to 32 bits by replicating bit 7.
///
/// Used for loaded byte values.
#[inline]
pub fn sign_extend_8(value: u8) -> u32 {
    value as i8 as i32 as u32
}

/// Zero-extends a 16-bit value to 32 bits.
///
/// Used for logical immediates and loaded unsigned halfword values.
#[inline]
pub fn zero_extend(value: u16) -> u32 {
    u32::from(value)
}

/// Decodes a 32-bit instruction word into its tagged variant.
///
/// Dispatches on the primary opcode, then on the function code for the
/// register-type class and on the `rt` condition selector for REGIMM
/// branches. Never fails: encodings this core does not model come back as
/// [`Instruction::Invalid`] carrying the fault to report.
pub fn decode(inst: u32) -> Instruction {
    let rs = inst.rs();
    let rt = inst.rt();
    let simm = sign_extend_16(inst.imm16()) as i32;
    let zimm = zero_extend(inst.imm16());

    match inst.op() {
        opcodes::OP_SPECIAL => decode_special(inst),
        opcodes::OP_REGIMM => decode_regimm(inst),

        opcodes::OP_J => Instruction::J {
            target: inst.target26(),
        },
        opcodes::OP_JAL => Instruction::Jal {
            target: inst.target26(),
        },

        opcodes::OP_BEQ => Instruction::Beq { rs, rt, offset: simm },
        opcodes::OP_BNE => Instruction::Bne { rs, rt, offset: simm },
        opcodes::OP_BLEZ => {
            if rt == 0 {
                Instruction::Blez { rs, offset: simm }
            } else {
                Instruction::Invalid(Fault::IllegalOperands {
                    mnemonic: "blez",
                    raw: inst,
                })
            }
        }
        opcodes::OP_BGTZ => {
            if rt == 0 {
                Instruction::Bgtz { rs, offset: simm }
            } else {
                Instruction::Invalid(Fault::IllegalOperands {
                    mnemonic: "bgtz",
                    raw: inst,
                })
            }
        }

        opcodes::OP_ADDI => Instruction::Addi { rt, rs, imm: simm },
        opcodes::OP_ADDIU => Instruction::Addiu { rt, rs, imm: simm },
        opcodes::OP_ANDI => Instruction::Andi { rt, rs, imm: zimm },
        opcodes::OP_ORI => Instruction::Ori { rt, rs, imm: zimm },
        opcodes::OP_XORI => Instruction::Xori { rt, rs, imm: zimm },
        opcodes::OP_LUI => {
            if rs == 0 {
                Instruction::Lui {
                    rt,
                    imm: inst.imm16(),
                }
            } else {
                Instruction::Invalid(Fault::IllegalOperands {
                    mnemonic: "lui",
                    raw: inst,
                })
            }
        }

        opcodes::OP_LB => Instruction::Lb { rt, base: rs, offset: simm },
        opcodes::OP_LBU => Instruction::Lbu { rt, base: rs, offset: simm },
        opcodes::OP_LH => Instruction::Lh { rt, base: rs, offset: simm },
        opcodes::OP_LHU => Instruction::Lhu { rt, base: rs, offset: simm },
        opcodes::OP_LW => Instruction::Lw { rt, base: rs, offset: simm },
        opcodes::OP_SB => Instruction::Sb { rt, base: rs, offset: simm },
        opcodes::OP_SH => Instruction::Sh { rt, base: rs, offset: simm },
        opcodes::OP_SW => Instruction::Sw { rt, base: rs, offset: simm },

        op => Instruction::Invalid(Fault::UnknownOpcode { op, raw: inst }),
    }
}

/// Decodes the register-type class (opcode 0) by function code.
fn decode_special(inst: u32) -> Instruction {
    let rs = inst.rs();
    let rt = inst.rt();
    let rd = inst.rd();
    let shamt = inst.shamt();

    match inst.funct() {
        funct::FN_SLL => Instruction::Sll { rd, rt, shamt },
        funct::FN_SRL => Instruction::Srl { rd, rt, shamt },
        funct::FN_SRA => Instruction::Sra { rd, rt, shamt },
        funct::FN_SLLV => Instruction::Sllv { rd, rt, rs },
        funct::FN_SRLV => Instruction::Srlv { rd, rt, rs },
        funct::FN_SRAV => Instruction::Srav { rd, rt, rs },
        funct::FN_JR => Instruction::Jr { rs },
        funct::FN_JALR => Instruction::Jalr { rd, rs },
        funct::FN_SYSCALL => Instruction::Syscall,
        funct::FN_MFHI => Instruction::Mfhi { rd },
        funct::FN_MTHI => Instruction::Mthi { rs },
        funct::FN_MFLO => Instruction::Mflo { rd },
        funct::FN_MTLO => Instruction::Mtlo { rs },
        funct::FN_MULT => Instruction::Mult { rs, rt },
        funct::FN_MULTU => Instruction::Multu { rs, rt },
        funct::FN_DIV => Instruction::Div { rs, rt },
        funct::FN_DIVU => Instruction::Divu { rs, rt },
        funct::FN_ADD => Instruction::Add { rd, rs, rt },
        funct::FN_ADDU => Instruction::Addu { rd, rs, rt },
        funct::FN_SUB => Instruction::Sub { rd, rs, rt },
        funct::FN_SUBU => Instruction::Subu { rd, rs, rt },
        funct::FN_AND => Instruction::And { rd, rs, rt },
        funct::FN_OR => Instruction::Or { rd, rs, rt },
        funct::FN_XOR => Instruction::Xor { rd, rs, rt },
        funct::FN_NOR => Instruction::Nor { rd, rs, rt },
        funct::FN_SLT => Instruction::Slt { rd, rs, rt },
        funct::FN_SLTU => Instruction::Sltu { rd, rs, rt },
        f => Instruction::Invalid(Fault::UnknownFunct { funct: f, raw: inst }),
    }
}

/// Decodes the REGIMM class (opcode 1) by the `rt` condition selector.
fn decode_regimm(inst: u32) -> Instruction {
    let rs = inst.rs();
    let offset = sign_extend_16(inst.imm16()) as i32;

    match inst.rt() as u32 {
        regimm::RT_BLTZ => Instruction::Bltz { rs, offset },
        regimm::RT_BGEZ => Instruction::Bgez { rs, offset },
        regimm::RT_BLTZAL => Instruction::Bltzal { rs, offset },
        regimm::RT_BGEZAL => Instruction::Bgezal { rs, offset },
        rt => Instruction::Invalid(Fault::UnknownCondition { rt, raw: inst }),
    }
}
