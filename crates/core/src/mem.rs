//! Memory collaborator boundary.
//!
//! The backing store, address translation, and program loading live outside
//! this core; everything it needs from them is a word-granular read/write
//! surface. The core never validates addresses before delegating, and it
//! performs at most one data read and one data write per step (both only
//! for the read-modify-write sub-word stores).

/// Word-granular memory interface.
///
/// Behavior for unmapped or misaligned addresses is the implementor's
/// contract. For sub-word loads and stores the core assumes the implementor
/// resolves address-relative byte/half selection: `read_word(addr)` must
/// return the word whose low byte/half corresponds to `addr`, rather than
/// the core re-deriving `addr & 3` itself.
pub trait Memory {
    /// Reads the 32-bit word addressed by `addr`.
    fn read_word(&mut self, addr: u32) -> u32;

    /// Writes a 32-bit word to `addr`.
    fn write_word(&mut self, addr: u32, value: u32);
}
