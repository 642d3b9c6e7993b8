use super::*;
use ff::PrimeField;
use midnight_proofs::circuit::{Cell, Region, Value};
use midnight_proofs::plonk::{Advice, Column, Error};
use midnight_proofs::utils::rational::Rational;
use std::ops::BitXor;

/// The inner type of [AssignedByte]. A wrapper around `u8`
#[derive(Copy, Clone, Debug)]
pub struct Byte(pub u8);

impl Byte {
    /// Creates a new [Byte] element from a field element, checking at
    /// synthesis time that the element is in the range [0, 255].
    pub(crate) fn new_from_field<F: PrimeField>(field: F) -> Self {
        let bi_v = get_word_biguint_from_le_field(field);
        #[cfg(not(test))]
        assert!(bi_v <= BigUint::from(255u8));
        Byte(bi_v.to_bytes_le().first().copied().unwrap())
    }
}

impl BitXor for Byte {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

/// Allows us to call the .assign_advice() method of the region with a Byte as
/// its value
impl<F: PrimeField> From<&Byte> for Rational<F> {
    fn from(value: &Byte) -> Self {
        Self::Trivial(F::from(value.0 as u64))
    }
}

/// This wrapper type on `AssignedCell<Byte, F>` is designed to enforce type
/// safety on assigned bytes. It prevents the user from creating an
/// [AssignedByte] without using the designated entry points, which guarantee
/// (with constraints) that the assigned value is indeed in the range [0, 256).
#[derive(Clone, Debug)]
pub struct AssignedByte<F: PrimeField>(AssignedCell<Byte, F>);

impl<F: PrimeField> AssignedByte<F> {
    /// Takes an [AssignedNative] and copies it to another cell of the circuit
    /// as an [AssignedByte]. The range check is performed at synthesis time;
    /// the caller must make sure the target cell is range constrained in the
    /// circuit, which is why only the base operations can turn a native cell
    /// into a byte.
    pub(crate) fn copy_advice_byte_from_native(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        cell_to_copy: AssignedNative<F>,
    ) -> Result<Self, Error> {
        // Check value is in range
        let byte_value = cell_to_copy.value().map(|v| Byte::new_from_field(*v));
        // Create AssignedCell with the same value but different type
        let assigned_byte =
            Self(region.assign_advice(|| annotation, column, offset, || byte_value)?);
        // Constrain cells have equal values
        region.constrain_equal(cell_to_copy.cell(), assigned_byte.cell())?;

        Ok(assigned_byte)
    }

    /// Takes an [AssignedByte] and copies it to another cell of the circuit.
    /// No new range check is needed, the source cell is already constrained.
    pub(crate) fn copy_advice_byte(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        cell_to_copy: AssignedByte<F>,
    ) -> Result<Self, Error> {
        let byte_value = cell_to_copy.0.value().map(|v| Byte(v.0));
        let assigned_byte =
            Self(region.assign_advice(|| annotation, column, offset, || byte_value)?);
        region.constrain_equal(cell_to_copy.cell(), assigned_byte.cell())?;

        Ok(assigned_byte)
    }

    /// Given a [Byte] value, creates an [AssignedByte] holding it. Only
    /// available to the base operations, which enforce the range constraints
    /// over the new cell.
    pub(crate) fn assign_advice_byte(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        byte_value: Value<Byte>,
    ) -> Result<AssignedByte<F>, Error> {
        Ok(Self(region.assign_advice(|| annotation, column, offset, || byte_value)?))
    }

    /// Gets the inner cell of an assigned byte.
    pub fn cell(&self) -> Cell {
        self.0.cell()
    }

    /// Gets the inner value of an assigned byte.
    pub fn value(&self) -> Value<Byte> {
        self.0.value().cloned()
    }
}

impl<F: PrimeField> From<AssignedByte<F>> for AssignedCell<Byte, F> {
    fn from(value: AssignedByte<F>) -> Self {
        value.0
    }
}
