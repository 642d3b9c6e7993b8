use super::*;
use ff::PrimeField;
use midnight_proofs::circuit::{AssignedCell, Cell, Region, Value};
use midnight_proofs::plonk::{Advice, Column, Error};
use midnight_proofs::utils::rational::Rational;
use std::ops::{BitXor, Sub};

/// The inner type of [AssignedWord64]. A wrapper around `u64`, the lane size
/// of the hash.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Word64(pub u64);

impl Word64 {
    /// Creates a new [Word64] from a field element, checking at synthesis
    /// time that the element fits in 64 bits.
    pub(crate) fn new_from_field<F: PrimeField>(field: F) -> Self {
        let bi_v = get_word_biguint_from_le_field(field);
        #[cfg(not(test))]
        assert!(bi_v <= BigUint::from((1u128 << 64) - 1));
        let mut bytes = bi_v.to_bytes_le();
        bytes.resize(8, 0);
        u64::from_le_bytes(bytes.try_into().unwrap()).into()
    }

    pub(crate) fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl BitXor for Word64 {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Sub for Word64 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<u64> for Word64 {
    /// A u64 has a trivial conversion into a [Word64]
    fn from(value: u64) -> Self {
        Word64(value)
    }
}

impl<F: PrimeField> From<AssignedCell<Word64, F>> for AssignedWord64<F> {
    fn from(value: AssignedCell<Word64, F>) -> Self {
        Self(value)
    }
}

/// Allows us to call the .assign_advice() method of the region with a Word64
/// as its value
impl<F: PrimeField> From<&Word64> for Rational<F> {
    fn from(value: &Word64) -> Self {
        Self::Trivial(F::from(value.0))
    }
}

/// This wrapper type on `AssignedCell<Word64, F>` is designed to enforce type
/// safety on assigned 64-bit words: the packed form of a hash lane. It
/// prevents the user from creating an [AssignedWord64] without using the
/// designated entry points, which guarantee (with constraints) that the
/// assigned value is indeed in the range [0, 2^64 - 1].
#[derive(Clone, Debug)]
pub(crate) struct AssignedWord64<F: PrimeField>(AssignedCell<Word64, F>);

impl<F: PrimeField> AssignedWord64<F> {
    /// Copies an [AssignedWord64] in the trace into another cell.
    pub(crate) fn copy_advice_word(
        &self,
        region: &mut Region<'_, F>,
        column: Column<Advice>,
        offset: usize,
        annotation: &str,
    ) -> Result<Self, Error> {
        let result = self.0.copy_advice(|| annotation, region, column, offset)?;
        Ok(Self(result))
    }

    /// Assigns a fixed word in the trace. Safe to create because the value is
    /// a constant, pinned through the fixed column to a value known by
    /// everyone.
    pub(crate) fn assign_fixed_word(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        word_value: Word64,
    ) -> Result<Self, Error> {
        let result =
            region.assign_advice_from_constant(|| annotation, column, offset, word_value)?;
        Ok(Self(result))
    }

    /// Given a value holding a field element, converts it into a [Word64] and
    /// assigns it into a cell. Only the base operations may call this, since
    /// they are the ones enabling the decomposition and range constraints
    /// over the new cell.
    pub(crate) fn assign_advice_word_from_field(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        value: Value<F>,
    ) -> Result<Self, Error> {
        // Check value is in range
        let word_value = value.map(|v| Word64::new_from_field(v));
        // Create AssignedCell with the same value but different type
        Self::assign_advice_word(region, annotation, column, offset, word_value)
    }

    /// Given a value holding a [Word64], assigns it into a cell.
    pub(crate) fn assign_advice_word(
        region: &mut Region<'_, F>,
        annotation: &str,
        column: Column<Advice>,
        offset: usize,
        word_value: Value<Word64>,
    ) -> Result<Self, Error> {
        Ok(Self(region.assign_advice(|| annotation, column, offset, || word_value)?))
    }

    pub(crate) fn value(&self) -> Value<Word64> {
        self.0.value().cloned()
    }

    pub(crate) fn cell(&self) -> Cell {
        self.0.cell()
    }
}
