use super::*;
use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::{Advice, Column, Error};
use midnight_proofs::utils::rational::Rational;

/// The inner type of [AssignedCarry]. A wrapper around `u8` holding a value
/// in [0, 2].
#[derive(Copy, Clone, Debug)]
struct Carry(u8);

impl Carry {
    /// Creates a new [Carry] element, checking at synthesis time that the
    /// field element is 0, 1 or 2.
    fn new_from_field<F: PrimeField>(field: F) -> Self {
        let bi_v = get_word_biguint_from_le_field(field);
        #[cfg(not(test))]
        assert!(bi_v <= BigUint::from(2u8));
        Carry(bi_v.to_bytes_le().first().copied().unwrap())
    }
}

/// Allows us to call the .assign_advice() method of the region with a Carry
/// as its value
impl<F: PrimeField> From<&Carry> for Rational<F> {
    fn from(value: &Carry) -> Self {
        Self::Trivial(F::from(value.0 as u64))
    }
}

/// This wrapper type on `AssignedNative<F>` enforces type safety on assigned
/// two-bit carries. The three-word addition gate uses it: the sum of three
/// 64-bit words occupies at most 66 bits, so its carry is in [0, 2].
#[must_use]
pub(crate) struct AssignedCarry<F: PrimeField>(#[allow(dead_code)] AssignedCell<Carry, F>);

impl<F: PrimeField> AssignedCarry<F> {
    /// Assigns a two-bit carry in the trace. The value is range-checked at
    /// synthesis time; the gate that creates the cell (the three-word
    /// addition) is the one constraining it to [0, 2] in the circuit.
    pub(crate) fn assign_advice_carry(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        value: Value<F>,
    ) -> Result<Self, Error> {
        let carry_value = value.map(|v| Carry::new_from_field(v));
        let assigned_carry =
            Self(region.assign_advice(|| annotation, column, offset, || carry_value)?);
        Ok(assigned_carry)
    }
}
