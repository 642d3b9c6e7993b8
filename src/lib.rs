//! Halo2 circuit for Zcash's hSig hash: Blake2b-256 keyed with the fixed
//! 16-byte `ZcashComputehSig` key.
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
// #![deny(rust_2018_idioms)]
use midnight_proofs::{circuit::Layouter, plonk::ConstraintSystem};

use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::{Advice, Column, Error, Expression, Selector, TableColumn};
use midnight_proofs::poly::Rotation;

pub(crate) mod base_operations;

#[cfg(test)]
mod tests;
pub mod hsig;
pub mod types;
pub mod usage_utils;
