//! A chip computing Zcash's hSig hash inside a circuit: Blake2b-256 keyed
//! with the fixed 16-byte `ZcashComputehSig` key. The interface works with
//! message inputs consisting of [crate::types::AssignedNative] cells. The
//! algorithm expects those values to be in the range of a byte, and
//! constrains them to it.
//!
//! The chip relies on a set of basic instructions, implemented as a trait
//! called [hsig_instructions::HsigInstructions]. The lookup tables used by
//! the base operations have `2**16` rows, which means that all circuits
//! instantiating this chip will be at least `2**17` rows, as the circuit is
//! padded to provide ZK.

/// This is the trait that contains most of the behaviour of the hSig chip.
pub(crate) mod hsig_instructions;

/// Basic definitions and constants for the hSig chip.
pub mod utils;

/// The chip implementation.
pub mod hsig_chip;

/// Number of advice columns required by the chip.
pub const NB_HSIG_ADVICE_COLS: usize = 9;
