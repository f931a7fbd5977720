//! Common types shared across the core.
//!
//! This module collects the pieces every other module leans on:
//! 1. **Constants:** Architectural widths and masks.
//! 2. **Errors:** The [`error::Fault`] type for reportable, non-fatal
//!    execution faults.

/// Architectural constants (word size, register count, region mask).
pub mod constants;
/// Execution fault definitions.
pub mod error;
