use crate::types::row::AssignedRow;
use crate::types::word::AssignedWord64;
use ff::PrimeField;

// ----- Blake2b constants, hSig flavour -----

/// Size in bytes of one compression chunk.
pub const BLAKE2B_BLOCK_SIZE: usize = 128;

/// The fixed key of the hSig hash. Zcash derives hSig with
/// Blake2b-256(key || message) under this 16-byte key.
pub const HSIG_KEY: [u8; 16] = *b"ZcashComputehSig";

/// Size in bytes of the digest. This chip only computes the 256-bit variant.
pub const OUTPUT_LENGTH_IN_BYTES: usize = 32;

pub(crate) const IV_CONSTANTS: [u64; 8] = [
    0x6A09E667F3BCC908u64,
    0xBB67AE8584CAA73Bu64,
    0x3C6EF372FE94F82Bu64,
    0xA54FF53A5F1D36F1u64,
    0x510E527FADE682D1u64,
    0x9B05688C2B3E6C1Fu64,
    0x1F83D9ABFB41BD6Bu64,
    0x5BE0CD19137E2179u64,
];

/// The message-word permutation schedule. Rounds beyond the tenth reuse the
/// table cyclically: round r uses row r mod 10.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// The lanes each of the 8 mixing calls of a round works on: the first four
/// calls mix the columns of the working vector, the last four its diagonals.
pub(crate) const MIX_SCHEDULE: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// The parameter word folded into the first state lane before any chunk is
/// processed: IV[0] xor 0x0101kknn, where kk is the key length and nn the
/// digest length, both in bytes.
pub(crate) fn initial_state_word_0() -> u64 {
    const PARAMETER_BLOCK_PREFIX: u64 = 0x01010000u64;
    let key_length_shifted = (HSIG_KEY.len() as u64) << 8;
    IV_CONSTANTS[0] ^ PARAMETER_BLOCK_PREFIX ^ key_length_shifted ^ OUTPUT_LENGTH_IN_BYTES as u64
}

/// Number of 128-byte chunks the prepared input (key block plus message)
/// splits into. At least 1: the key block alone fills a whole chunk.
pub(crate) fn total_chunks_for(total_length_in_bytes: usize) -> usize {
    (BLAKE2B_BLOCK_SIZE + total_length_in_bytes).div_ceil(BLAKE2B_BLOCK_SIZE)
}

/// The byte counter folded into the working vector for a given chunk: the
/// number of prepared-input bytes consumed up to and including that chunk.
/// For the last chunk the padding bytes don't count, so the counter is the
/// full prepared length (key block included); for every other chunk it is a
/// whole number of blocks.
pub(crate) fn processed_bytes_count_for_chunk(
    chunk_index: usize,
    total_chunks: usize,
    total_length_in_bytes: usize,
) -> u128 {
    if chunk_index == total_chunks - 1 {
        (BLAKE2B_BLOCK_SIZE + total_length_in_bytes) as u128
    } else {
        (BLAKE2B_BLOCK_SIZE * (chunk_index + 1)) as u128
    }
}

/// Enforces the constructor contract over the message length declaration.
/// The declared byte length must be consistent with the number of input
/// cells and their bit width, within one element of slack for a partially
/// used final element. When padding is not requested, the length must also
/// be a multiple of 64 bytes or fill the input cells exactly.
pub(crate) fn enforce_length_consistency(
    input_cell_count: usize,
    bit_width_per_input_element: usize,
    total_length_in_bytes: usize,
    padding_required: bool,
) {
    let declared_bits = total_length_in_bytes * 8;
    assert!(
        declared_bits <= input_cell_count * bit_width_per_input_element,
        "Inconsistent length information: {total_length_in_bytes} bytes declared for \
         {input_cell_count} input elements of {bit_width_per_input_element} bits"
    );
    assert!(
        input_cell_count == 0
            || declared_bits >= (input_cell_count - 1) * bit_width_per_input_element,
        "Inconsistent length information: {total_length_in_bytes} bytes declared for \
         {input_cell_count} input elements of {bit_width_per_input_element} bits"
    );
    if !padding_required {
        assert!(
            total_length_in_bytes % 64 == 0
                || input_cell_count * bit_width_per_input_element == declared_bits,
            "When padding is not forced, the length in bytes must be a multiple of 64"
        );
    }
}

/// Extracts the full number cell of each of the 16 chunk rows.
pub(crate) fn full_number_of_each_chunk_row<F: PrimeField>(
    chunk_rows: [AssignedRow<F>; 16],
) -> [AssignedWord64<F>; 16] {
    chunk_rows
        .iter()
        .map(|row| row.full_number.clone())
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
}
