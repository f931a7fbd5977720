//! Architectural state container.
//!
//! This module implements the only persistent entity of the core. It provides:
//! 1. **Storage:** `PC`, 32 general-purpose registers, and `HI`/`LO`.
//! 2. **Double-buffer discipline:** States are cheap to clone; the dispatcher
//!    seeds each next state from the current one so unassigned fields carry
//!    forward, and the stepping loop owns the swap.
//! 3. **Observability:** A register dump for front-end diagnostics, and
//!    serde derives so front ends can snapshot and restore machine state.

use serde::{Deserialize, Serialize};

use crate::common::constants::REG_COUNT;

/// Programmer-visible machine state.
///
/// Register index 0 is conventionally a hard-wired zero in the modeled ISA,
/// but this core does **not** enforce that: writes to index 0 pass through.
/// Enforcing zero-ness, if desired, belongs to a layer above the dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchState {
    /// Program counter. Word-aligned by convention; alignment is not enforced.
    pub pc: u32,
    /// General-purpose registers, indexed 0-31.
    pub regs: [u32; REG_COUNT],
    /// High word of the most recent multiply, or the division remainder.
    pub hi: u32,
    /// Low word of the most recent multiply, or the division quotient.
    pub lo: u32,
}

impl ArchState {
    /// Creates a state with every field zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub fn reg(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a general-purpose register.
    ///
    /// Writes to index 0 pass through unmodified; see the type-level note.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to store.
    pub fn set_reg(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Dumps the PC, HI/LO, and all general-purpose registers to stdout.
    ///
    /// Useful for debugging and tracing machine state during simulation.
    pub fn dump(&self) {
        println!("pc ={:#010x} hi ={:#010x} lo ={:#010x}", self.pc, self.hi, self.lo);
        for i in (0..REG_COUNT).step_by(2) {
            println!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
