//! Range-tagged cell types for the hSig circuit.

/// This module holds the wrapper types that make the value ranges of the
/// circuit explicit. Whenever an [AssignedBit], [AssignedCarry],
/// [AssignedByte], [AssignedWord64] or [AssignedRow] appears, its value has
/// been range checked, both at synthesis time and through circuit
/// constraints.
///
/// The wrappers can only be built through the designated entry points, which
/// are reserved to the base operations: the operation that creates a cell is
/// the one responsible for enabling the gates that constrain it.
use ff::PrimeField;
use midnight_proofs::circuit::AssignedCell;
use num_bigint::BigUint;

/// Native type for an [AssignedCell] that hasn't been constrained yet.
pub type AssignedNative<F> = AssignedCell<F, F>;

/// Module for assigned bits (boolean carries).
pub mod bit;
/// Module for assigned two-bit carries.
pub mod carry;
/// Module for assigned bytes.
pub mod byte;
/// Module for assigned 64-bit words.
pub mod word;
/// Module for assigned decomposition rows.
pub mod row;

/// Given a field element, this function checks that it is in the range
/// [0, 2^64-1] and returns a [BigUint] holding its value. We assume the
/// internal representation of the field is little endian; if it's not, the
/// result is undefined and probably incorrect.
fn get_word_biguint_from_le_field<F: PrimeField>(fe: F) -> BigUint {
    let field_internal_representation = fe.to_repr(); // Should be in little-endian
    let (bytes, zeros) = field_internal_representation.as_ref().split_at(8);

    let field_is_out_of_range = zeros.iter().any(|&el| el != 0u8);

    if field_is_out_of_range {
        panic!("Arguments to the function are incorrect")
    } else {
        BigUint::from_bytes_le(bytes)
    }
}
