use blake2b_hsig_halo2::hsig::utils::{HSIG_KEY, OUTPUT_LENGTH_IN_BYTES};
use blake2b_hsig_halo2::usage_utils::circuit_runner::HsigCircuitInputs;
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, SamplingMode};
use midnight_curves::bls12_381::Fq;
use midnight_proofs::circuit::Value;
use rand::Rng;

pub fn benchmarking_chunk_counts() -> Vec<usize> {
    vec![1, 5, 10, 20, 30]
}

pub fn sample_size() -> usize {
    30
}

pub fn configure_group(group: &mut BenchmarkGroup<WallTime>) {
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(sample_size());
}

/// Builds circuit inputs whose prepared input spans the desired number of
/// 128-byte chunks. The key block is always the first chunk, so the message
/// covers the remaining ones.
pub fn random_input_for_desired_chunks(amount_of_chunks: usize) -> HsigCircuitInputs {
    let mut rng = rand::thread_rng();

    let message_size = (amount_of_chunks - 1) * 128;
    let random_message_bytes: Vec<u8> =
        (0..message_size).map(|_| rng.gen_range(0..=255)).collect();

    let digest = blake2b_simd::Params::new()
        .hash_length(OUTPUT_LENGTH_IN_BYTES)
        .key(&HSIG_KEY)
        .hash(&random_message_bytes);
    let expected_digest: [Fq; OUTPUT_LENGTH_IN_BYTES] = digest
        .as_bytes()
        .iter()
        .map(|byte| Fq::from(*byte as u64))
        .collect::<Vec<_>>()
        .try_into()
        .unwrap();

    let message_values: Vec<Value<Fq>> =
        random_message_bytes.iter().map(|x| Value::known(Fq::from(*x as u64))).collect();

    (message_values, message_size, expected_digest)
}
