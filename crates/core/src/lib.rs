//! MIPS-I functional instruction-execution core.
//!
//! This crate models the architectural effect of executing exactly one
//! machine instruction on a 32-bit MIPS-I-style processor:
//! 1. **Arch:** The architectural state (`PC`, 32 general registers, `HI`, `LO`).
//! 2. **ISA:** Field extraction, sign/zero extension, tagged-variant decoding,
//!    and disassembly for the arithmetic, logical, shift, multiply/divide,
//!    branch, jump, load, store, and system-call classes.
//! 3. **Exec:** The step dispatcher that applies one instruction's semantics
//!    and the default `PC + 4` control-flow rule.
//! 4. **Mem:** The word-granular memory collaborator boundary.
//!
//! The core is deliberately small at its seams: the backing store, program
//! loader, and stepping front end live outside it. One call to [`step`] reads
//! the current state, performs at most one data-memory access, and returns a
//! fully populated next state together with a halt signal and any diagnostic
//! fault. The caller owns the swap of next state into current state.
//!
//! Not modeled: cycle timing, pipeline hazards, floating point, interrupts,
//! exceptions, TLB, caches, MMIO devices, and virtual memory.

/// Architectural state (program counter, general registers, HI/LO).
pub mod arch;
/// Common constants and the execution fault type.
pub mod common;
/// Step dispatcher and its arithmetic helpers.
pub mod exec;
/// Instruction set (field extraction, decode, ABI names, disassembly).
pub mod isa;
/// Word-granular memory collaborator trait.
pub mod mem;

/// Programmer-visible machine state; clone it to seed a next state.
pub use crate::arch::ArchState;
/// Non-fatal execution faults reported by the dispatcher.
pub use crate::common::error::Fault;
/// One-instruction execution entry points and their result types.
pub use crate::exec::{Control, StepResult, fetch, step};
/// Memory collaborator boundary; implement for any word-addressed store.
pub use crate::mem::Memory;
