use crate::tests::test_negate::negate_circuit::NegateCircuit;
use crate::tests::value_for;
use midnight_curves::bls12_381::Fq;
use midnight_proofs::circuit::Value;
use midnight_proofs::dev::MockProver;
use rand::Rng;


#[test]
fn test_positive_negate() {
    let trace: [Value<Fq>; 2] = [value_for(0u64), value_for(u64::MAX)];
    let circuit = NegateCircuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
fn test_positive_random_negate() {
    let mut rng = rand::thread_rng();
    let n: u64 = rng.gen();
    let trace: [Value<Fq>; 2] = [value_for(n), value_for(!n)];
    let circuit = NegateCircuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}

#[test]
#[should_panic]
fn test_negative_negate() {
    let trace: [Value<Fq>; 2] = [value_for(0u64), value_for(0u64)];
    let circuit = NegateCircuit::<Fq>::new_for_trace(trace);
    let prover = MockProver::run(&circuit, vec![]).unwrap();
    prover.verify().unwrap();
}
