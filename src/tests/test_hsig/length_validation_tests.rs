use crate::usage_utils::hsig_circuit::HsigCircuit;
use crate::tests::value_for;
use midnight_curves::bls12_381::Fq;
use midnight_proofs::circuit::Value;

fn message_of(length: usize) -> Vec<Value<Fq>> {
    (0..length).map(|i| value_for((i % 256) as u8)).collect()
}

#[test]
fn test_construction_accepts_a_partially_used_final_element() {
    // 3 declared bytes over 4 elements of 8 bits: within the one-element
    // slack the contract allows.
    let _ = HsigCircuit::<Fq>::new_for(message_of(4), 8, 3, false, true);
}

#[test]
#[should_panic]
fn test_construction_rejects_a_length_longer_than_the_inputs() {
    let _ = HsigCircuit::<Fq>::new_for(message_of(4), 8, 5, false, true);
}

#[test]
#[should_panic]
fn test_construction_rejects_a_length_shorter_than_the_inputs() {
    let _ = HsigCircuit::<Fq>::new_for(message_of(4), 8, 2, false, true);
}

#[test]
#[should_panic]
fn test_construction_rejects_unpadded_lengths_that_need_padding() {
    // Without padding the declared length must be a multiple of 64 bytes or
    // fill the input elements exactly.
    let _ = HsigCircuit::<Fq>::new_for(message_of(4), 8, 3, false, false);
}

#[test]
fn test_construction_accepts_unpadded_exact_lengths() {
    let _ = HsigCircuit::<Fq>::new_for(message_of(4), 8, 4, false, false);
}
