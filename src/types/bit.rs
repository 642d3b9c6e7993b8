use super::*;
use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::{Advice, Column, Error};
use midnight_proofs::utils::rational::Rational;

/// The inner type of [AssignedBit]. A wrapper around `bool`
#[derive(Copy, Clone, Debug)]
struct Bit(bool);

impl Bit {
    /// Creates a new [Bit] element, checking at synthesis time that the field
    /// element is 0 or 1.
    fn new_from_field<F: PrimeField>(field: F) -> Self {
        let bi_v = get_word_biguint_from_le_field(field);
        #[cfg(not(test))]
        assert!(bi_v == BigUint::from(0u8) || bi_v == BigUint::from(1u8));
        let bit = bi_v.to_bytes_le().first().copied().unwrap();
        Bit(bit == 1)
    }
}

/// Allows us to call the .assign_advice() method of the region with a Bit as
/// its value
impl<F: PrimeField> From<&Bit> for Rational<F> {
    fn from(value: &Bit) -> Self {
        Self::Trivial(F::from(value.0 as u64))
    }
}

/// This wrapper type on `AssignedNative<F>` enforces type safety on assigned
/// bits. The two-word addition gate uses it for its carry: the sum of two
/// 64-bit words occupies at most 65 bits, so the carry is a single bit.
#[must_use]
pub(crate) struct AssignedBit<F: PrimeField>(#[allow(dead_code)] AssignedCell<Bit, F>);

impl<F: PrimeField> AssignedBit<F> {
    /// Assigns a bit in the trace. The value is range-checked at synthesis
    /// time; the gate that creates the cell (the two-word addition) is the
    /// one constraining it to be boolean in the circuit.
    pub(crate) fn assign_advice_bit(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        value: Value<F>,
    ) -> Result<Self, Error> {
        // Check value is in range
        let bit_value = value.map(|v| Bit::new_from_field(v));
        // Create AssignedCell with the same value but different type
        let assigned_bit =
            Self(region.assign_advice(|| annotation, column, offset, || bit_value)?);
        Ok(assigned_bit)
    }
}
