//! Circuit runner module for creating an [HsigCircuit], synthesizing,
//! proving and verifying it. It can work with both Mock Prover and Real
//! Prover.

use crate::hsig::utils::OUTPUT_LENGTH_IN_BYTES;
use crate::usage_utils::hsig_circuit::HsigCircuit;
use midnight_curves::bls12_381::{Bls12, Fq};
use midnight_proofs::circuit::Value;
use midnight_proofs::dev::MockProver;
use midnight_proofs::plonk::Error;
use midnight_proofs::{
    plonk::{create_proof, keygen_pk, keygen_vk_with_k, prepare, ProvingKey, VerifyingKey},
    poly::{
        commitment::Guard,
        kzg::{params::ParamsKZG, KZGCommitmentScheme},
    },
    transcript::{Blake2b256, CircuitTranscript, Transcript},
};

/// The inputs for the [HsigCircuit]: the message byte values, the declared
/// message length and the expected digest. This helps us avoid passing
/// multiple parameters to the methods that create circuits.
pub type HsigCircuitInputs = (Vec<Value<Fq>>, usize, [Fq; OUTPUT_LENGTH_IN_BYTES]);

/// Bit width of the input elements fed to the circuit by this runner: one
/// byte per element.
pub const BIT_WIDTH_PER_INPUT_ELEMENT: usize = 8;

/// The circuit rows are dominated by the 2^16-row xor table, so this is the
/// log2 size for every message that fits the test suite.
const K: u32 = 17;

/// Circuit runner struct
#[derive(Debug)]
pub struct CircuitRunner;

/// Circuit runner methods for Mock Prover
impl CircuitRunner {
    /// Preprocess inputs, synthesize, prove and verify the circuit using
    /// Mock Prover
    pub fn mocked_preprocess_inputs_synthesize_prove_and_verify(
        message_hex: &str,
        expected_hex: &str,
    ) {
        let circuit_inputs = Self::prepare_parameters_for_test(message_hex, expected_hex);

        let circuit = Self::create_circuit_for_packed_inputs(circuit_inputs.clone());
        let prover = Self::mock_prove_with_public_inputs_ref(&circuit_inputs.2, &circuit);
        Self::verify_mock_prover(prover);
    }

    /// Verify the circuit using Mock Prover
    pub fn verify_mock_prover(prover: MockProver<Fq>) {
        prover.verify().unwrap()
    }

    /// Create and run the Mock Prover using public inputs
    pub fn mock_prove_with_public_inputs_ref(
        expected_digest_fields: &[Fq],
        circuit: &HsigCircuit<Fq>,
    ) -> MockProver<Fq> {
        MockProver::run(circuit, vec![expected_digest_fields.to_vec()]).unwrap()
    }

    /// Create circuit for the given message values and declared length
    pub fn create_circuit_for_inputs(
        message_values: Vec<Value<Fq>>,
        total_length_in_bytes: usize,
    ) -> HsigCircuit<Fq> {
        HsigCircuit::<Fq>::new_for(
            message_values,
            BIT_WIDTH_PER_INPUT_ELEMENT,
            total_length_in_bytes,
            false,
            true,
        )
    }

    /// Create circuit for the given inputs, packed in a [HsigCircuitInputs]
    /// to avoid passing multiple parameters
    pub fn create_circuit_for_packed_inputs(ci: HsigCircuitInputs) -> HsigCircuit<Fq> {
        Self::create_circuit_for_inputs(ci.0, ci.1)
    }

    /// Convert a hex message and its expected digest into circuit inputs.
    /// The message bytes become values, since they are private inputs of the
    /// circuit; the digest becomes public-input field elements.
    pub fn prepare_parameters_for_test(
        message_hex: &str,
        expected_hex: &str,
    ) -> HsigCircuitInputs {
        // MESSAGE
        let message_bytes = hex::decode(message_hex).expect("Invalid hex string");
        let total_length_in_bytes = message_bytes.len();
        let message_values =
            message_bytes.iter().map(|x| Value::known(Fq::from(*x as u64))).collect::<Vec<_>>();

        // EXPECTED DIGEST
        let expected_bytes = hex::decode(expected_hex).expect("Invalid hex string");
        let expected_digest_fields: [Fq; OUTPUT_LENGTH_IN_BYTES] = expected_bytes
            .iter()
            .map(|x| Fq::from(*x as u64))
            .collect::<Vec<_>>()
            .try_into()
            .expect("The expected digest must be 32 bytes long");

        (message_values, total_length_in_bytes, expected_digest_fields)
    }
}

/// Circuit runner methods for Real Prover
impl CircuitRunner {
    /// Preprocess inputs, synthesize, prove and verify the circuit using a
    /// real prover
    pub fn real_preprocess_inputs_synthesize_prove_and_verify(
        message_hex: &str,
        expected_hex: &str,
    ) -> Result<(), Error> {
        let circuit_inputs = Self::prepare_parameters_for_test(message_hex, expected_hex);

        let circuit: HsigCircuit<Fq> =
            Self::create_circuit_for_packed_inputs(circuit_inputs.clone());

        let params = ParamsKZG::<Bls12>::unsafe_setup(K, &mut rand::thread_rng());
        let vk: VerifyingKey<Fq, KZGCommitmentScheme<Bls12>> = Self::create_vk(&circuit, &params);
        let pk: ProvingKey<Fq, KZGCommitmentScheme<Bls12>> = Self::create_pk(&circuit, vk);
        let proof = Self::create_proof(&circuit_inputs.2, circuit, &params, &pk);
        Self::verify(&circuit_inputs.2, &params, pk, &proof)
    }

    /// Create the verifying key for the given circuit and parameters
    pub fn create_vk(
        circuit: &HsigCircuit<Fq>,
        params: &ParamsKZG<Bls12>,
    ) -> VerifyingKey<Fq, KZGCommitmentScheme<Bls12>> {
        keygen_vk_with_k(params, circuit, K).expect("Verifying key should be created")
    }

    /// Create the proving key for the given circuit and parameters
    pub fn create_pk(
        circuit: &HsigCircuit<Fq>,
        vk: VerifyingKey<Fq, KZGCommitmentScheme<Bls12>>,
    ) -> ProvingKey<Fq, KZGCommitmentScheme<Bls12>> {
        keygen_pk(vk.clone(), circuit).expect("Proving key should be created")
    }

    /// Create the proof for the given circuit and parameters
    pub fn create_proof(
        expected_digest_fields: &[Fq],
        circuit: HsigCircuit<Fq>,
        params: &ParamsKZG<Bls12>,
        pk: &ProvingKey<Fq, KZGCommitmentScheme<Bls12>>,
    ) -> Vec<u8> {
        let mut transcript: CircuitTranscript<Blake2b256> = CircuitTranscript::init();
        create_proof(
            params,
            pk,
            &[circuit],
            0,
            &[&[expected_digest_fields]],
            &mut transcript,
            rand::thread_rng(),
        )
        .expect("Proof generation should work");
        transcript.finalize()
    }

    /// Verify the proof for the given circuit and parameters
    pub fn verify(
        expected_digest_fields: &[Fq],
        params: &ParamsKZG<Bls12>,
        pk: ProvingKey<Fq, KZGCommitmentScheme<Bls12>>,
        proof: &[u8],
    ) -> Result<(), Error> {
        let mut transcript: CircuitTranscript<Blake2b256> = CircuitTranscript::init_from_bytes(proof);

        assert!(prepare::<Fq, KZGCommitmentScheme<Bls12>, _>(
            pk.get_vk(),
            &[&[]],
            &[&[expected_digest_fields]],
            &mut transcript,
        )?
        .verify(&params.verifier_params())
        .is_ok());
        Ok(())
    }
}
