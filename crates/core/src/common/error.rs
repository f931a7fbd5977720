//! Execution fault definitions.
//!
//! Faults are reportable, non-fatal conditions: the dispatcher surfaces them
//! to the operator and the simulation continues with the default `PC + 4`
//! advance and no other architectural mutation. Nothing here unwinds or
//! halts the process; halting is the run flag's job, not an error path.

use thiserror::Error;

/// A reportable, non-fatal condition raised while executing one instruction.
///
/// Three classes exist (none stop the stepping loop):
/// unrecognized encodings, illegal operand combinations, and divide by zero.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The primary opcode field does not name a supported instruction.
    #[error("unrecognized opcode {op:#04x} (instruction {raw:#010x})")]
    UnknownOpcode {
        /// The 6-bit primary opcode field.
        op: u32,
        /// The raw instruction encoding.
        raw: u32,
    },

    /// The function code under opcode 0 does not name a supported instruction.
    #[error("unrecognized function code {funct:#04x} (instruction {raw:#010x})")]
    UnknownFunct {
        /// The 6-bit function code field.
        funct: u32,
        /// The raw instruction encoding.
        raw: u32,
    },

    /// The `rt` condition selector of a REGIMM branch is not recognized.
    #[error("unrecognized branch condition {rt:#04x} (instruction {raw:#010x})")]
    UnknownCondition {
        /// The 5-bit `rt` field used as the condition selector.
        rt: u32,
        /// The raw instruction encoding.
        raw: u32,
    },

    /// A recognized instruction carries an operand field it requires to be zero.
    ///
    /// Raised for LUI with nonzero `rs` and for BLEZ/BGTZ with nonzero `rt`.
    /// The PC still advances by 4 so an interactive stepper is never wedged
    /// on the faulting instruction.
    #[error("illegal operand combination for {mnemonic} (instruction {raw:#010x})")]
    IllegalOperands {
        /// Mnemonic of the instruction whose encoding constraint was violated.
        mnemonic: &'static str,
        /// The raw instruction encoding.
        raw: u32,
    },

    /// DIV or DIVU with a zero divisor.
    ///
    /// The ISA leaves the numeric result undefined; this core's policy is to
    /// leave `HI`/`LO` carried forward unchanged and report the condition.
    #[error("divide by zero (instruction {raw:#010x})")]
    DivideByZero {
        /// The raw instruction encoding.
        raw: u32,
    },
}
