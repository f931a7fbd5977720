//! Execution dispatcher.
//!
//! This module implements the single-step contract of the core:
//! 1. **Next-state seeding:** The next state starts as a clone of the current
//!    state, so every field a handler does not assign carries forward.
//! 2. **Default control flow:** `next.pc = current.pc + 4` unless a branch,
//!    jump, or the halting system call overrides it.
//! 3. **Dispatch:** One match arm per decoded instruction variant; at most
//!    one data-memory read and one write per step (load/store classes only).
//! 4. **Diagnostics:** Executed instructions are trace-logged disassembled;
//!    faults are warned and returned, never panicked or escalated.

use tracing::{trace, warn};

use crate::arch::ArchState;
use crate::common::constants::{BYTE_MASK, HALF_MASK, REGION_MASK, SHAMT_MASK, WORD_BYTES};
use crate::common::error::Fault;
use crate::isa::abi::{REG_RA, REG_V0, SERVICE_EXIT};
use crate::isa::decode::{decode, sign_extend_8, sign_extend_16};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::mem::Memory;

/// Arithmetic primitives (shifts, compares, multiply/divide).
pub mod alu;

/// What the stepping loop should do after this step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Commit the next state and keep stepping.
    Continue,
    /// Clear the run flag; the machine halted at this instruction.
    Halt,
}

/// The outcome of executing one instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// The fully populated next architectural state.
    pub next: ArchState,
    /// Whether the stepping loop should continue or halt.
    pub control: Control,
    /// A reportable, non-fatal fault, if the instruction raised one.
    ///
    /// The fault has already been logged; it is surfaced here so front ends
    /// and tests can inspect it. The simulation may always continue.
    pub fault: Option<Fault>,
}

/// Fetches the instruction word addressed by the current PC.
pub fn fetch<M: Memory + ?Sized>(state: &ArchState, memory: &mut M) -> u32 {
    memory.read_word(state.pc)
}

/// Executes one instruction against the current state.
///
/// Reads `current` and the fetched `inst` word, performs at most one data
/// access through `memory`, and returns the next state. Unmodified fields
/// equal the corresponding current-state fields; the caller adopts
/// `StepResult::next` as the new current state before the following call.
///
/// Unrecognized or illegal encodings mutate nothing beyond the default
/// `PC + 4` advance and come back as [`StepResult::fault`], so an
/// interactive stepper can inspect the fault and carry on.
pub fn step<M: Memory + ?Sized>(current: &ArchState, inst: u32, memory: &mut M) -> StepResult {
    let mut next = current.clone();
    next.pc = current.pc.wrapping_add(WORD_BYTES);

    let decoded = decode(inst);
    trace!(pc = format_args!("{:#010x}", current.pc), "{}", disassemble(inst));

    let mut control = Control::Continue;
    let mut fault = None;

    match decoded {
        // Shifts by an immediate amount.
        Instruction::Sll { rd, rt, shamt } => next.regs[rd] = current.regs[rt] << shamt,
        Instruction::Srl { rd, rt, shamt } => next.regs[rd] = current.regs[rt] >> shamt,
        Instruction::Sra { rd, rt, shamt } => next.regs[rd] = alu::sra(current.regs[rt], shamt),

        // Shifts by a register amount, low 5 bits.
        Instruction::Sllv { rd, rt, rs } => {
            next.regs[rd] = current.regs[rt] << (current.regs[rs] & SHAMT_MASK);
        }
        Instruction::Srlv { rd, rt, rs } => {
            next.regs[rd] = current.regs[rt] >> (current.regs[rs] & SHAMT_MASK);
        }
        Instruction::Srav { rd, rt, rs } => {
            next.regs[rd] = alu::sra(current.regs[rt], current.regs[rs] & SHAMT_MASK);
        }

        Instruction::Jr { rs } => next.pc = current.regs[rs],
        Instruction::Jalr { rd, rs } => {
            next.regs[rd] = current.pc.wrapping_add(WORD_BYTES);
            next.pc = current.regs[rs];
        }

        Instruction::Syscall => {
            if current.regs[REG_V0] == SERVICE_EXIT {
                // Halt with the PC still on the syscall instruction.
                next.pc = current.pc;
                control = Control::Halt;
            }
            // Other service numbers are dispatched by the environment, not
            // modeled here; the PC simply advances.
        }

        Instruction::Mfhi { rd } => next.regs[rd] = current.hi,
        Instruction::Mthi { rs } => next.hi = current.regs[rs],
        Instruction::Mflo { rd } => next.regs[rd] = current.lo,
        Instruction::Mtlo { rs } => next.lo = current.regs[rs],

        Instruction::Mult { rs, rt } => {
            (next.hi, next.lo) = alu::mult(current.regs[rs], current.regs[rt]);
        }
        Instruction::Multu { rs, rt } => {
            (next.hi, next.lo) = alu::multu(current.regs[rs], current.regs[rt]);
        }
        Instruction::Div { rs, rt } => {
            match alu::div(current.regs[rs], current.regs[rt]) {
                Some((hi, lo)) => (next.hi, next.lo) = (hi, lo),
                None => fault = Some(Fault::DivideByZero { raw: inst }),
            }
        }
        Instruction::Divu { rs, rt } => {
            match alu::divu(current.regs[rs], current.regs[rt]) {
                Some((hi, lo)) => (next.hi, next.lo) = (hi, lo),
                None => fault = Some(Fault::DivideByZero { raw: inst }),
            }
        }

        // Wrapping arithmetic; ADD/SUB do not trap on overflow in this model.
        Instruction::Add { rd, rs, rt } | Instruction::Addu { rd, rs, rt } => {
            next.regs[rd] = current.regs[rs].wrapping_add(current.regs[rt]);
        }
        Instruction::Sub { rd, rs, rt } | Instruction::Subu { rd, rs, rt } => {
            next.regs[rd] = current.regs[rs].wrapping_sub(current.regs[rt]);
        }

        Instruction::And { rd, rs, rt } => next.regs[rd] = current.regs[rs] & current.regs[rt],
        Instruction::Or { rd, rs, rt } => next.regs[rd] = current.regs[rs] | current.regs[rt],
        Instruction::Xor { rd, rs, rt } => next.regs[rd] = current.regs[rs] ^ current.regs[rt],
        Instruction::Nor { rd, rs, rt } => {
            next.regs[rd] = !(current.regs[rs] | current.regs[rt]);
        }
        Instruction::Slt { rd, rs, rt } => {
            next.regs[rd] = alu::slt(current.regs[rs], current.regs[rt]);
        }
        Instruction::Sltu { rd, rs, rt } => {
            next.regs[rd] = alu::sltu(current.regs[rs], current.regs[rt]);
        }

        Instruction::Addi { rt, rs, imm } | Instruction::Addiu { rt, rs, imm } => {
            next.regs[rt] = current.regs[rs].wrapping_add(imm as u32);
        }
        Instruction::Andi { rt, rs, imm } => next.regs[rt] = current.regs[rs] & imm,
        Instruction::Ori { rt, rs, imm } => next.regs[rt] = current.regs[rs] | imm,
        Instruction::Xori { rt, rs, imm } => next.regs[rt] = current.regs[rs] ^ imm,
        Instruction::Lui { rt, imm } => next.regs[rt] = u32::from(imm) << 16,

        Instruction::Beq { rs, rt, offset } => {
            if current.regs[rs] == current.regs[rt] {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Bne { rs, rt, offset } => {
            if current.regs[rs] != current.regs[rt] {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Blez { rs, offset } => {
            if (current.regs[rs] as i32) <= 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Bgtz { rs, offset } => {
            if (current.regs[rs] as i32) > 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Bltz { rs, offset } => {
            if (current.regs[rs] as i32) < 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Bgez { rs, offset } => {
            if (current.regs[rs] as i32) >= 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }
        // The linking branches write the link register whether or not the
        // branch is taken.
        Instruction::Bltzal { rs, offset } => {
            next.regs[REG_RA] = current.pc.wrapping_add(WORD_BYTES);
            if (current.regs[rs] as i32) < 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }
        Instruction::Bgezal { rs, offset } => {
            next.regs[REG_RA] = current.pc.wrapping_add(WORD_BYTES);
            if (current.regs[rs] as i32) >= 0 {
                next.pc = branch_target(current.pc, offset);
            }
        }

        Instruction::J { target } => next.pc = jump_target(current.pc, target),
        Instruction::Jal { target } => {
            next.regs[REG_RA] = current.pc.wrapping_add(WORD_BYTES);
            next.pc = jump_target(current.pc, target);
        }

        Instruction::Lb { rt, base, offset } => {
            let byte = memory.read_word(effective_addr(current, base, offset)) & BYTE_MASK;
            next.regs[rt] = sign_extend_8(byte as u8);
        }
        Instruction::Lbu { rt, base, offset } => {
            next.regs[rt] = memory.read_word(effective_addr(current, base, offset)) & BYTE_MASK;
        }
        Instruction::Lh { rt, base, offset } => {
            let half = memory.read_word(effective_addr(current, base, offset)) & HALF_MASK;
            next.regs[rt] = sign_extend_16(half as u16);
        }
        Instruction::Lhu { rt, base, offset } => {
            next.regs[rt] = memory.read_word(effective_addr(current, base, offset)) & HALF_MASK;
        }
        Instruction::Lw { rt, base, offset } => {
            next.regs[rt] = memory.read_word(effective_addr(current, base, offset));
        }

        // Sub-word stores merge into the addressed word: read, replace the
        // low byte/half, write back.
        Instruction::Sb { rt, base, offset } => {
            let addr = effective_addr(current, base, offset);
            let merged = (memory.read_word(addr) & !BYTE_MASK) | (current.regs[rt] & BYTE_MASK);
            memory.write_word(addr, merged);
        }
        Instruction::Sh { rt, base, offset } => {
            let addr = effective_addr(current, base, offset);
            let merged = (memory.read_word(addr) & !HALF_MASK) | (current.regs[rt] & HALF_MASK);
            memory.write_word(addr, merged);
        }
        Instruction::Sw { rt, base, offset } => {
            memory.write_word(effective_addr(current, base, offset), current.regs[rt]);
        }

        Instruction::Invalid(f) => fault = Some(f),
    }

    if let Some(f) = &fault {
        warn!(pc = format_args!("{:#010x}", current.pc), "{f}");
    }

    StepResult {
        next,
        control,
        fault,
    }
}

/// Target of a taken branch: `pc + 4` plus the word displacement in bytes.
///
/// Relative to the instruction after the branch; this model has no branch
/// delay slot.
#[inline]
fn branch_target(pc: u32, offset: i32) -> u32 {
    pc.wrapping_add(WORD_BYTES).wrapping_add((offset << 2) as u32)
}

/// Target of J/JAL: the word-aligned target within the current 256 MiB region.
#[inline]
fn jump_target(pc: u32, target: u32) -> u32 {
    (pc & REGION_MASK) | (target << 2)
}

/// Effective address of a load/store: sign-extended offset plus base register.
#[inline]
fn effective_addr(state: &ArchState, base: usize, offset: i32) -> u32 {
    state.regs[base].wrapping_add(offset as u32)
}
