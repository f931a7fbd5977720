//! Architectural constants.
//!
//! Baseline widths and masks of the modeled machine. Everything here is
//! fixed by the ISA; none of it is configuration.

/// Size of one machine word in bytes. The PC advances by this per step.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Upper four PC bits preserved by J/JAL.
///
/// Jump targets are 26-bit word indices; the resulting address stays inside
/// the 256 MiB region selected by these bits of the jump instruction's PC.
pub const REGION_MASK: u32 = 0xf000_0000;

/// Low-byte mask for sub-word store merging.
pub const BYTE_MASK: u32 = 0xff;

/// Low-half mask for sub-word store merging.
pub const HALF_MASK: u32 = 0xffff;

/// Mask applied to a register value used as a variable shift amount.
pub const SHAMT_MASK: u32 = 0x1f;
