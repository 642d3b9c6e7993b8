use crate::types::byte::AssignedByte;
use crate::types::word::AssignedWord64;
use ff::PrimeField;

/// The decomposed ("exploded") form of a hash lane, laid out as a trace row:
/// full_number | limb_0 | limb_1 | limb_2 | limb_3 | limb_4 | limb_5 | limb_6 | limb_7
///
/// Where full_number is a [AssignedWord64] and the limbs are the little
/// endian byte representation of the full number. Operations that act on
/// individual bytes (xor, limb rotations, digest extraction) consume and
/// produce rows; operations on packed values only need the full number.
#[derive(Debug)]
pub(crate) struct AssignedRow<F: PrimeField> {
    pub(crate) full_number: AssignedWord64<F>,
    pub(crate) limbs: [AssignedByte<F>; 8],
}

impl<F: PrimeField> AssignedRow<F> {
    pub(crate) fn new(full_number: AssignedWord64<F>, limbs: [AssignedByte<F>; 8]) -> Self {
        Self { full_number, limbs }
    }
}
