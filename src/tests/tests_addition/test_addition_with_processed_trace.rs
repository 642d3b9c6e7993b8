use crate::tests::tests_addition::addition_circuits::AdditionMod64Circuit;
use crate::tests::{generate_row_8bits, value_for, zero};
use midnight_curves::bls12_381::Fq;
use midnight_proofs::dev::MockProver;
use rand::Rng;

#[test]
fn test_positive_addition_without_carry() {
    // The second operand row carries the carry cell in its first limb slot:
    // here both the operand and the carry are 0.
    let trace = [
        generate_row_8bits::<u64, Fq>(42u64),
        generate_row_8bits::<u64, Fq>(0u64),
        generate_row_8bits::<u64, Fq>(42u64),
    ];
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
fn test_positive_addition_with_carry() {
    // u64::MAX + 1 wraps to 0 with carry 1. The second operand row's first
    // limb slot happens to hold both the operand's low byte and the carry,
    // and both are 1 here.
    let trace = [
        generate_row_8bits::<u64, Fq>(u64::MAX),
        generate_row_8bits::<u64, Fq>(1u64),
        generate_row_8bits::<u64, Fq>(0u64),
    ];
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
fn test_positive_random_addition() {
    let mut rng = rand::thread_rng();
    let x: u64 = rng.gen();
    let y: u64 = rng.gen();
    let raw_sum = x as u128 + y as u128;

    let mut y_row = generate_row_8bits::<u64, Fq>(y);
    y_row[1] = value_for((raw_sum >> 64) as u64);
    let trace = [
        generate_row_8bits::<u64, Fq>(x),
        y_row,
        generate_row_8bits::<u64, Fq>(raw_sum as u64),
    ];
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
#[should_panic]
fn test_negative_addition() {
    let trace = [
        generate_row_8bits::<u64, Fq>(1u64),
        generate_row_8bits::<u64, Fq>(1u64),
        generate_row_8bits::<u64, Fq>(3u64),
    ];

    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
#[should_panic]
fn test_negative_sum_correct_but_no_carry_tracked() {
    // The result row holds the raw 65-bit field sum instead of the trimmed
    // 64-bit value. The addition gate itself is satisfied with carry 0, but
    // the decomposition of the result row cannot hold, so the untrimmed sum
    // is rejected.
    let mut rng = rand::thread_rng();
    let x: u64 = rng.gen();
    let mut y_row = generate_row_8bits::<u64, Fq>(u64::MAX);
    y_row[1] = zero();
    let trace = [
        generate_row_8bits::<u64, Fq>(x),
        y_row,
        generate_row_8bits::<u128, Fq>(x as u128 + u64::MAX as u128),
    ];
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
#[should_panic]
fn test_negative_sum_correct_but_unnecessary_carry() {
    // The sum is correct but the carry cell claims a wrap that didn't
    // happen.
    let mut trace = [
        generate_row_8bits::<u64, Fq>(1u64),
        generate_row_8bits::<u64, Fq>(2u64),
        generate_row_8bits::<u64, Fq>(3u64),
    ];
    trace[1][1] = value_for(1u8);
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
#[should_panic]
fn test_negative_sum_correct_but_decomposition_exceedes_range_check() {
    // The first operand's decomposition adds up, but one of its limbs
    // exceeds the byte range.
    let mut y_row = generate_row_8bits::<u64, Fq>(0u64);
    y_row[1] = zero();
    let mut trace = [
        generate_row_8bits::<u64, Fq>(1u64 << 8),
        y_row,
        generate_row_8bits::<u64, Fq>(1u64 << 8),
    ];
    trace[0][1] = value_for(1u16 << 8);
    trace[0][2] = value_for(0u8);
    let circuit = AdditionMod64Circuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}
