//! Architectural state of the modeled processor.
//!
//! The programmer-visible registers that fully determine future execution:
//! the program counter, the 32 general-purpose registers, and the `HI`/`LO`
//! multiply/divide registers.

/// Architectural state container and accessors.
pub mod state;

pub use state::ArchState;
