use crate::usage_utils::circuit_runner::CircuitRunner;

const EMPTY_MESSAGE_DIGEST: &str =
    "e58199f28d56fea2ec39fa5e6f2720d27a38d0b187c1cde079d37e3f799b5dd0";
const ABC_DIGEST: &str = "4ebf7df5e1b1d1c8837bb6bb970eb076130ec5e21287473e76c286c83179435b";

#[test]
fn test_hsig_of_empty_message_positive() {
    // The key block alone forces one compression call
    CircuitRunner::mocked_preprocess_inputs_synthesize_prove_and_verify(
        "",
        EMPTY_MESSAGE_DIGEST,
    );
}

#[test]
#[should_panic]
fn test_hsig_of_empty_message_negative() {
    // Same digest with its last byte changed
    let wrong_digest =
        "e58199f28d56fea2ec39fa5e6f2720d27a38d0b187c1cde079d37e3f799b5dd1";
    CircuitRunner::mocked_preprocess_inputs_synthesize_prove_and_verify("", wrong_digest);
}

#[test]
fn test_hsig_is_deterministic_across_builds() {
    // Two independent builds from the same inputs produce the same circuit
    // and both satisfy the same public digest.
    let message_hex = "616263";
    for _ in 0..2 {
        let inputs = CircuitRunner::prepare_parameters_for_test(message_hex, ABC_DIGEST);
        let circuit = CircuitRunner::create_circuit_for_packed_inputs(inputs.clone());
        let prover = CircuitRunner::mock_prove_with_public_inputs_ref(&inputs.2, &circuit);
        CircuitRunner::verify_mock_prover(prover);
    }
}
