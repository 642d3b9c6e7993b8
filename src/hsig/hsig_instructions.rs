use crate::types::byte::AssignedByte;
use crate::types::word::AssignedWord64;
use crate::types::AssignedNative;
use ff::PrimeField;
use midnight_proofs::circuit::{Layouter, Region};
use midnight_proofs::plonk::Error;

/// The cells holding the constants of the hash: the initialization vector,
/// the parameter word for the first state lane, and the zero used for
/// padding.
pub(crate) type ConstantCells<F> =
    ([AssignedWord64<F>; 8], AssignedWord64<F>, AssignedNative<F>);

/// The instruction set of the hSig computation. A chip implementing this
/// trait can drive the whole keyed hash.
pub trait HsigInstructions<F: PrimeField>: Clone {
    /// Populate all lookup tables needed by the chip.
    fn populate_lookup_tables(&self, layouter: &mut impl Layouter<F>) -> Result<(), Error>;

    /// Assign the constants of the algorithm at the beginning of the trace:
    /// the initialization vector, the parameter word (IV[0] folded with the
    /// fixed key and output lengths) and the zero constant that backs every
    /// padding byte.
    fn assign_constant_cells(
        &self,
        region: &mut Region<'_, F>,
        advice_offset: &mut usize,
    ) -> Result<ConstantCells<F>, Error>;

    /// Computes the initial chaining state. It only depends on fixed
    /// constants, so it is known at circuit building time.
    fn initial_state(
        &self,
        iv_constant_cells: &[AssignedWord64<F>; 8],
        parameter_word: AssignedWord64<F>,
    ) -> [AssignedWord64<F>; 8];

    /// The top loop of the hash: builds the prepared input (key block
    /// followed by the message bytes), then consumes it chunk by chunk,
    /// compressing every full chunk as non-final and the remaining chunk as
    /// final. The chaining state lives in 8 word cells which are replaced by
    /// new cells after every compression. The returned bytes are the final
    /// serialized state, from which the digest is taken.
    #[allow(clippy::too_many_arguments)]
    fn process_chunks(
        &self,
        region: &mut Region<'_, F>,
        advice_offset: &mut usize,
        message: &[AssignedNative<F>],
        total_length_in_bytes: usize,
        iv_constants: &[AssignedWord64<F>; 8],
        chaining_state: &mut [AssignedWord64<F>; 8],
        zero_constant_cell: AssignedNative<F>,
    ) -> Result<[AssignedByte<F>; 64], Error>;

    /// One compression call: seeds the 16-lane working vector from the
    /// chaining state and the IV, folds in the byte counter, flips lane 14
    /// on the final chunk, runs the 12 mixing rounds and feeds the result
    /// forward into the chaining state.
    #[allow(clippy::too_many_arguments)]
    fn compress(
        &self,
        region: &mut Region<'_, F>,
        row_offset: &mut usize,
        iv_constants: &[AssignedWord64<F>; 8],
        chaining_state: &mut [AssignedWord64<F>; 8],
        chunk_words: [AssignedWord64<F>; 16],
        processed_bytes_count: u128,
        is_last_chunk: bool,
    ) -> Result<[AssignedByte<F>; 64], Error>;

    /// The G function: one quarter-round of mixing. Each compression call
    /// runs it 8 times per round over 12 rounds. 'x' and 'y' hold the two
    /// message words this call absorbs; [lane_indexes] selects the four
    /// working-vector lanes it reads and replaces.
    fn mix(
        &self,
        lane_indexes: [usize; 4],
        x: AssignedWord64<F>,
        y: AssignedWord64<F>,
        state: &mut [AssignedWord64<F>; 16],
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<(), Error>;
}
