//! MIPS-I instruction set.
//!
//! Defines everything needed to take a raw 32-bit instruction word apart:
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31:26).
//! - `funct`: Function codes under the register-type opcode 0.
//! - `regimm`: Condition selectors under the REGIMM opcode 1.
//! - `abi`: O32 register names and the register indices with architected roles.
//! - `instruction`: Bit-field extraction and the tagged [`Instruction`] variants.
//! - `decode`: Extension helpers and the raw-word-to-variant decoder.
//! - `disasm`: Mnemonic rendering for debug tracing and diagnostics.

/// O32 ABI register names and architected register indices.
pub mod abi;
/// Decode logic and sign/zero extension helpers.
pub mod decode;
/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;
/// Function code definitions for register-type instructions.
pub mod funct;
/// Bit-field extraction and the decoded instruction variants.
pub mod instruction;
/// Primary opcode definitions.
pub mod opcodes;
/// REGIMM condition selector definitions.
pub mod regimm;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
