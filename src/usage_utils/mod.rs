//! Utilities showing how the hSig chip is meant to be driven: a ready-made
//! circuit wiring the chip to an instance column, and a runner that mock
//! proves or really proves it.

pub mod circuit_runner;
pub mod hsig_circuit;
