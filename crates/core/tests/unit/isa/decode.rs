//! Tagged-variant decoder tests.
//!
//! One assertion per representative encoding of each class, plus the
//! encoding-legality checks: unknown primary opcodes, unknown function
//! codes, unknown REGIMM selectors, and the operand constraints of LUI,
//! BLEZ, and BGTZ.

use mipsim_core::Fault;
use mipsim_core::isa::{Instruction, decode};

use crate::common::builder::instruction as asm;

#[test]
fn decodes_register_type_by_funct() {
    assert_eq!(
        decode(asm::addu(2, 4, 5)),
        Instruction::Addu { rd: 2, rs: 4, rt: 5 }
    );
    assert_eq!(
        decode(asm::nor(10, 11, 12)),
        Instruction::Nor { rd: 10, rs: 11, rt: 12 }
    );
    assert_eq!(
        decode(asm::sll(8, 9, 31)),
        Instruction::Sll { rd: 8, rt: 9, shamt: 31 }
    );
    assert_eq!(decode(asm::jalr(31, 25)), Instruction::Jalr { rd: 31, rs: 25 });
    assert_eq!(decode(asm::syscall()), Instruction::Syscall);
    assert_eq!(decode(asm::mult(3, 7)), Instruction::Mult { rs: 3, rt: 7 });
}

#[test]
fn decodes_immediates_with_class_specific_extension() {
    // Arithmetic immediates sign-extend.
    assert_eq!(
        decode(asm::addi(8, 9, -1)),
        Instruction::Addi { rt: 8, rs: 9, imm: -1 }
    );
    // Logical immediates zero-extend.
    assert_eq!(
        decode(asm::andi(8, 9, 0x8000)),
        Instruction::Andi { rt: 8, rs: 9, imm: 0x0000_8000 }
    );
    assert_eq!(
        decode(asm::ori(8, 9, 0xffff)),
        Instruction::Ori { rt: 8, rs: 9, imm: 0x0000_ffff }
    );
    assert_eq!(decode(asm::lui(8, 0x1234)), Instruction::Lui { rt: 8, imm: 0x1234 });
}

#[test]
fn decodes_branches_and_jumps() {
    assert_eq!(
        decode(asm::beq(4, 5, -2)),
        Instruction::Beq { rs: 4, rt: 5, offset: -2 }
    );
    assert_eq!(decode(asm::bltz(4, 16)), Instruction::Bltz { rs: 4, offset: 16 });
    assert_eq!(
        decode(asm::bgezal(4, -1)),
        Instruction::Bgezal { rs: 4, offset: -1 }
    );
    assert_eq!(decode(asm::j(0x012_3456)), Instruction::J { target: 0x012_3456 });
    assert_eq!(decode(asm::jal(1)), Instruction::Jal { target: 1 });
}

#[test]
fn decodes_loads_and_stores() {
    assert_eq!(
        decode(asm::lw(8, 29, -4)),
        Instruction::Lw { rt: 8, base: 29, offset: -4 }
    );
    assert_eq!(
        decode(asm::sb(8, 16, 3)),
        Instruction::Sb { rt: 8, base: 16, offset: 3 }
    );
    assert_eq!(
        decode(asm::lhu(9, 17, 0x100)),
        Instruction::Lhu { rt: 9, base: 17, offset: 0x100 }
    );
}

#[test]
fn unknown_primary_opcode_is_invalid() {
    let word = 0x3f << 26;
    assert_eq!(
        decode(word),
        Instruction::Invalid(Fault::UnknownOpcode { op: 0x3f, raw: word })
    );
}

#[test]
fn unknown_funct_is_invalid() {
    let word = asm::encode_r(0x3f, 1, 2, 3, 0);
    assert_eq!(
        decode(word),
        Instruction::Invalid(Fault::UnknownFunct { funct: 0x3f, raw: word })
    );
}

#[test]
fn unknown_regimm_condition_is_invalid() {
    let word = asm::encode_regimm(0x02, 4, 8);
    assert_eq!(
        decode(word),
        Instruction::Invalid(Fault::UnknownCondition { rt: 0x02, raw: word })
    );
}

#[test]
fn lui_requires_zero_rs() {
    let word = asm::encode_i(0x0f, 1, 8, 0x1234);
    assert_eq!(
        decode(word),
        Instruction::Invalid(Fault::IllegalOperands { mnemonic: "lui", raw: word })
    );
}

#[test]
fn blez_and_bgtz_require_zero_rt() {
    let blez_bad = asm::encode_i(0x06, 4, 1, 8);
    assert_eq!(
        decode(blez_bad),
        Instruction::Invalid(Fault::IllegalOperands { mnemonic: "blez", raw: blez_bad })
    );
    let bgtz_bad = asm::encode_i(0x07, 4, 31, 8);
    assert_eq!(
        decode(bgtz_bad),
        Instruction::Invalid(Fault::IllegalOperands { mnemonic: "bgtz", raw: bgtz_bad })
    );
}
