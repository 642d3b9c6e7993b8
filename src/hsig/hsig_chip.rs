use std::marker::PhantomData;

use crate::base_operations::addition_mod_64::AdditionMod64Config;
use crate::base_operations::generic_limb_rotation::LimbRotation;
use crate::base_operations::negate::NegateConfig;
use crate::base_operations::rotate_63::Rotate63Config;
use crate::base_operations::xor::XorConfig;
use crate::base_operations::{
    create_limb_decomposition_gate, create_range_check_gate, generate_row_from_assigned_bytes,
    populate_lookup_table,
};
use crate::hsig::hsig_instructions::{ConstantCells, HsigInstructions};
use crate::hsig::utils::{
    full_number_of_each_chunk_row, initial_state_word_0, processed_bytes_count_for_chunk,
    total_chunks_for, BLAKE2B_BLOCK_SIZE, HSIG_KEY, IV_CONSTANTS, MIX_SCHEDULE,
    OUTPUT_LENGTH_IN_BYTES, SIGMA,
};
use crate::hsig::NB_HSIG_ADVICE_COLS;
use crate::types::byte::AssignedByte;
use crate::types::row::AssignedRow;
use crate::types::word::AssignedWord64;
use crate::types::AssignedNative;
use ff::{Field, PrimeField};
use midnight_proofs::circuit::{Chip, Layouter, Region};
use midnight_proofs::plonk::{
    Advice, Column, ConstraintSystem, Error, Fixed, Selector, TableColumn,
};

/// Selectors and columns for the hSig chip.
#[derive(Clone, Debug)]
pub struct HsigConfig {
    /// Base operation configs
    addition_config: AdditionMod64Config,
    limb_rotation_config: LimbRotation,
    rotate_63_config: Rotate63Config,
    xor_config: XorConfig,
    negate_config: NegateConfig,
    /// Advice column for packed 64-bit words.
    full_number_u64: Column<Advice>,
    /// Columns for the byte limbs of decomposed words.
    pub limbs: [Column<Advice>; 8],
    /// Decomposition selectors
    q_range: Selector,
    q_decompose: Selector,
    t_range: TableColumn,
}

/// The chip for the hSig computation: Blake2b-256 of the message under the
/// fixed `ZcashComputehSig` key. All 64-bit lane arithmetic is emulated over
/// the field through 8-bit limb decompositions: xor through a precomputed
/// lookup table, wrapping additions through carry gates that trim the raw
/// 65/66-bit field sums back to 64 bits, rotations through limb re-indexing
/// (or a dedicated gate for the 63-bit case).
#[derive(Clone, Debug)]
pub struct HsigChip<F> {
    config: HsigConfig,
    _marker: PhantomData<F>,
}

impl<F: Field> Chip<F> for HsigChip<F> {
    type Config = HsigConfig;
    type Loaded = ();

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn loaded(&self) -> &Self::Loaded {
        &()
    }
}

impl<F: PrimeField> HsigInstructions<F> for HsigChip<F> {
    /// Two tables back the chip:
    /// * a range-check table for 8-bit limbs: [0, 255]
    /// * a 3-column table pre-computing the xor of every pair of bytes
    fn populate_lookup_tables(&self, layouter: &mut impl Layouter<F>) -> Result<(), Error> {
        populate_lookup_table(layouter, self.config.t_range)?;
        self.config.xor_config.populate_xor_lookup_table(layouter)
    }

    /// The constants used throughout the algorithm are pinned to cells at the
    /// beginning of the trace: the 8 IV words in the limb columns of the
    /// first row, then the zero constant and the parameter word.
    fn assign_constant_cells(
        &self,
        region: &mut Region<'_, F>,
        advice_offset: &mut usize,
    ) -> Result<ConstantCells<F>, Error> {
        let iv_constant_cells: [AssignedWord64<F>; 8] =
            self.assign_iv_constants_to_advice_cells(region, advice_offset)?;

        let zero_constant = region.assign_advice_from_constant(
            || "zero",
            self.config.limbs[0],
            *advice_offset,
            F::from(0),
        )?;

        // state[0] = IV[0] ^ 0x01010000 ^ (key length << 8) ^ output length,
        // with both lengths fixed by this chip.
        let parameter_word = self.assign_limb_constant_u64(
            region,
            advice_offset,
            "parameter word",
            initial_state_word_0(),
            1,
        )?;

        *advice_offset += 1;

        Ok((iv_constant_cells, parameter_word, zero_constant))
    }

    /// The initial chaining state only depends on fixed constants, so no
    /// constraint beyond the constant cells themselves is needed.
    fn initial_state(
        &self,
        iv_constant_cells: &[AssignedWord64<F>; 8],
        parameter_word: AssignedWord64<F>,
    ) -> [AssignedWord64<F>; 8] {
        let mut chaining_state = iv_constant_cells.clone();
        chaining_state[0] = parameter_word;
        chaining_state
    }

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
    ) -> Result<[AssignedByte<F>; 64], Error> {
        let prepared_input = self.prepare_input_bytes(
            region,
            advice_offset,
            &zero_constant_cell,
            message,
            total_length_in_bytes,
        )?;
        let total_chunks = total_chunks_for(total_length_in_bytes);

        // All whole chunks except the last one
        for chunk_index in 0..total_chunks - 1 {
            let chunk: [AssignedNative<F>; BLAKE2B_BLOCK_SIZE] = prepared_input
                [chunk_index * BLAKE2B_BLOCK_SIZE..(chunk_index + 1) * BLAKE2B_BLOCK_SIZE]
                .to_vec()
                .try_into()
                .unwrap();
            let chunk_rows = self.chunk_words_from_bytes(region, advice_offset, chunk)?;
            let chunk_words = full_number_of_each_chunk_row(chunk_rows);

            let processed_bytes_count = processed_bytes_count_for_chunk(
                chunk_index,
                total_chunks,
                total_length_in_bytes,
            );
            self.compress(
                region,
                advice_offset,
                iv_constants,
                chaining_state,
                chunk_words,
                processed_bytes_count,
                false,
            )?;
        }

        // The remaining chunk, zero-padded up to a whole block. Padding cells
        // are copies of the zero constant, so no extra constraint is needed
        // to pin them.
        let final_chunk_index = total_chunks - 1;
        let mut final_chunk_bytes =
            prepared_input[final_chunk_index * BLAKE2B_BLOCK_SIZE..].to_vec();
        final_chunk_bytes.resize(BLAKE2B_BLOCK_SIZE, zero_constant_cell);
        let final_chunk: [AssignedNative<F>; BLAKE2B_BLOCK_SIZE] =
            final_chunk_bytes.try_into().unwrap();
        let chunk_rows = self.chunk_words_from_bytes(region, advice_offset, final_chunk)?;
        let chunk_words = full_number_of_each_chunk_row(chunk_rows);

        let processed_bytes_count = processed_bytes_count_for_chunk(
            final_chunk_index,
            total_chunks,
            total_length_in_bytes,
        );
        self.compress(
            region,
            advice_offset,
            iv_constants,
            chaining_state,
            chunk_words,
            processed_bytes_count,
            true,
        )
    }

    fn compress(
        &self,
        region: &mut Region<'_, F>,
        row_offset: &mut usize,
        iv_constants: &[AssignedWord64<F>; 8],
        chaining_state: &mut [AssignedWord64<F>; 8],
        chunk_words: [AssignedWord64<F>; 16],
        processed_bytes_count: u128,
        is_last_chunk: bool,
    ) -> Result<[AssignedByte<F>; 64], Error> {
        let mut working_vector: Vec<AssignedWord64<F>> = Vec::new();
        working_vector.extend_from_slice(chaining_state);
        working_vector.extend_from_slice(iv_constants);

        let mut state: [AssignedWord64<F>; 16] = working_vector.try_into().unwrap();

        // state[12] ^= counter low half, state[13] ^= counter high half.
        // At this point both lanes still hold IV constants and the counter is
        // known at building time, so the folded lanes are constants too.
        let counter_low = processed_bytes_count as u64;
        let counter_high = (processed_bytes_count >> 64) as u64;
        state[12] = AssignedWord64::assign_fixed_word(
            region,
            "Counter low lane",
            self.config.full_number_u64,
            *row_offset,
            (counter_low ^ IV_CONSTANTS[4]).into(),
        )?;
        state[13] = AssignedWord64::assign_fixed_word(
            region,
            "Counter high lane",
            self.config.limbs[1],
            *row_offset,
            (counter_high ^ IV_CONSTANTS[5]).into(),
        )?;
        *row_offset += 1;

        if is_last_chunk {
            state[14] = self.not(&state[14], region, row_offset)?;
        }

        // Main loop: 12 rounds of 8 mixing calls, with the message words
        // permuted by the round schedule.
        for round in 0..12 {
            let schedule = SIGMA[round % 10];
            for j in 0..8 {
                self.mix(
                    MIX_SCHEDULE[j],
                    chunk_words[schedule[2 * j]].clone(),
                    chunk_words[schedule[2 * j + 1]].clone(),
                    &mut state,
                    region,
                    row_offset,
                )?;
            }
        }

        // Feed-forward: h[i] = h[i] xor v[i] xor v[i+8]. The second xor's
        // result row carries the serialized state bytes as its limbs.
        let mut state_bytes: Vec<AssignedByte<F>> = Vec::new();
        for i in 0..8 {
            let first_xor =
                self.xor(&chaining_state[i], &state[i], region, row_offset)?;
            let row = self.xor_reusing_first_operand(&first_xor, &state[i + 8], region, row_offset)?;
            let mut row_limbs: Vec<_> = row.limbs.into();
            state_bytes.append(&mut row_limbs);
            chaining_state[i] = row.full_number;
        }
        Ok(state_bytes.try_into().unwrap())
    }

    fn mix(
        &self,
        lane_indexes: [usize; 4],
        x: AssignedWord64<F>,
        y: AssignedWord64<F>,
        state: &mut [AssignedWord64<F>; 16],
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<(), Error> {
        let [a, b, c, d] = lane_indexes;

        // v[a] = v[a] + v[b] + x, trimmed from its raw 66-bit width
        let a_row = self.add_triple(&state[a], &state[b], &x, region, offset)?;

        // v[d] = rotr_64(v[d] ^ v[a], 32)
        let d_xor_a = self.xor_reusing_first_operand(&a_row, &state[d], region, offset)?;
        let d_word = self.rotate_right_32(d_xor_a, region, offset)?;

        // v[c] = v[c] + v[d], trimmed from its raw 65-bit width
        let c_row = self.add_reusing_first_operand(&d_word, &state[c], region, offset)?;

        // v[b] = rotr_64(v[b] ^ v[c], 24)
        let b_xor_c = self.xor_reusing_first_operand(&c_row, &state[b], region, offset)?;
        let b_word = self.rotate_right_24(b_xor_c, region, offset)?;

        // v[a] = v[a] + v[b] + y, trimmed from its raw 66-bit width
        let new_a_row =
            self.add_triple_reusing_first_operand(&b_word, &a_row.full_number, &y, region, offset)?;

        // v[d] = rotr_64(v[d] ^ v[a], 16)
        let d_xor_a = self.xor_reusing_first_operand(&new_a_row, &d_word, region, offset)?;
        let new_d_word = self.rotate_right_16(d_xor_a, region, offset)?;

        // v[c] = v[c] + v[d], trimmed from its raw 65-bit width
        let new_c_row =
            self.add_reusing_first_operand(&new_d_word, &c_row.full_number, region, offset)?;

        // v[b] = rotr_64(v[b] ^ v[c], 63)
        let b_xor_c = self.xor_reusing_first_operand(&new_c_row, &b_word, region, offset)?;
        let new_b_word = self.rotate_right_63(b_xor_c.full_number, region, offset)?;

        state[a] = new_a_row.full_number;
        state[b] = new_b_word;
        state[c] = new_c_row.full_number;
        state[d] = new_d_word;

        Ok(())
    }
}

impl<F: PrimeField> HsigChip<F> {
    /// Generation of a fresh chip from a configuration.
    pub fn new(config: &HsigConfig) -> Self {
        Self {
            config: config.clone(),
            _marker: PhantomData,
        }
    }

    /// Configuration of the chip. It should be called in the configuration of
    /// the user circuit, which owns the columns, before synthesis.
    ///
    /// Note: this function enables equality on all the columns it receives;
    /// it should not be done manually before calling it.
    pub fn configure(
        meta: &mut ConstraintSystem<F>,
        constants: Column<Fixed>,
        full_number_u64: Column<Advice>,
        limbs: [Column<Advice>; NB_HSIG_ADVICE_COLS - 1],
    ) -> <Self as Chip<F>>::Config {
        // Enabling column properties.
        meta.enable_constant(constants);
        meta.enable_equality(full_number_u64);
        for limb in limbs {
            meta.enable_equality(limb);
        }

        // Gate that checks if the 8-bit limb decomposition is correct
        let q_decompose = meta.complex_selector();
        create_limb_decomposition_gate(meta, q_decompose, full_number_u64, limbs);

        // Range-check lookups
        let q_range = meta.complex_selector();
        let t_range = meta.lookup_table_column();
        create_range_check_gate(meta, t_range, q_range, limbs);

        let rotate_63_config =
            Rotate63Config::configure(meta, full_number_u64, q_decompose, q_range);
        let negate_config = NegateConfig::configure(meta, full_number_u64);
        let limb_rotation_config = LimbRotation::configure(q_decompose);

        // The carry column reuses the first limb column: addition operand
        // rows never use their limb cells.
        let addition_config =
            AdditionMod64Config::configure(meta, full_number_u64, limbs[0], q_decompose, q_range);
        let xor_config =
            XorConfig::configure(meta, full_number_u64, limbs, q_decompose, q_range);

        HsigConfig {
            addition_config,
            limb_rotation_config,
            rotate_63_config,
            xor_config,
            negate_config,
            full_number_u64,
            limbs,
            q_range,
            q_decompose,
            t_range,
        }
    }

    /// Loading the tables used by the chip. Must be called once per circuit.
    pub fn load(&self, layouter: &mut impl Layouter<F>) -> Result<(), Error> {
        self.populate_lookup_tables(layouter)
    }

    /// Main method of the chip. The message cells should hold byte values;
    /// the chip constrains them to the byte range when it decomposes the
    /// chunks. Returns the 32 digest bytes in little-endian, lane-major
    /// order, each constrained to [0, 255].
    ///
    /// Only the first [total_length_in_bytes] message cells take part in the
    /// hash; the declared length must have been validated against the cell
    /// count beforehand (see [crate::usage_utils::hsig_circuit::HsigCircuit]).
    pub fn hsig(
        &self,
        layouter: &mut impl Layouter<F>,
        message: &[AssignedNative<F>],
        total_length_in_bytes: usize,
    ) -> Result<[AssignedByte<F>; OUTPUT_LENGTH_IN_BYTES], Error> {
        assert!(
            total_length_in_bytes <= message.len(),
            "Fewer message cells than the declared length"
        );
        // All the computation is performed inside a single region
        layouter.assign_region(
            || "hsig",
            |mut region| {
                // Initialize in 0 the offset for the advice cells in the region
                let mut advice_offset: usize = 0;

                let (iv_constant_cells, parameter_word, zero_constant) =
                    self.assign_constant_cells(&mut region, &mut advice_offset)?;

                let mut chaining_state =
                    self.initial_state(&iv_constant_cells, parameter_word.clone());

                let state_bytes = self.process_chunks(
                    &mut region,
                    &mut advice_offset,
                    message,
                    total_length_in_bytes,
                    &iv_constant_cells,
                    &mut chaining_state,
                    zero_constant,
                )?;

                // The digest is the first 32 bytes of the serialized state
                Ok(state_bytes[..OUTPUT_LENGTH_IN_BYTES].to_vec().try_into().unwrap())
            },
        )
    }
}

impl<F: PrimeField> HsigChip<F> {
    /// Assigns the fixed initialization vector to advice cells: the 8 limb
    /// columns of the first row of the trace.
    fn assign_iv_constants_to_advice_cells(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<[AssignedWord64<F>; 8], Error> {
        let ret: [AssignedWord64<F>; 8] = IV_CONSTANTS
            .iter()
            .enumerate()
            .map(|(index, constant)| {
                self.assign_limb_constant_u64(region, offset, "iv constants", *constant, index)
                    .unwrap()
            })
            .collect::<Vec<AssignedWord64<F>>>()
            .try_into()
            .unwrap();
        *offset += 1;
        Ok(ret)
    }

    /// Builds the prepared input: the key block (the 16 fixed key bytes
    /// zero-padded to a whole 128-byte block) followed by the message cells.
    /// Key and padding bytes are circuit constants.
    fn prepare_input_bytes(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        zero_constant_cell: &AssignedNative<F>,
        message: &[AssignedNative<F>],
        total_length_in_bytes: usize,
    ) -> Result<Vec<AssignedNative<F>>, Error> {
        let mut prepared =
            Vec::with_capacity(BLAKE2B_BLOCK_SIZE + total_length_in_bytes);

        // The 16 key bytes take the limb columns of two rows
        for (index, key_byte) in HSIG_KEY.iter().enumerate() {
            let key_cell = region.assign_advice_from_constant(
                || "key byte",
                self.config.limbs[index % 8],
                *offset + index / 8,
                F::from(*key_byte as u64),
            )?;
            prepared.push(key_cell);
        }
        *offset += HSIG_KEY.len() / 8;

        // Zero padding of the key block
        prepared.extend(
            std::iter::repeat(zero_constant_cell.clone())
                .take(BLAKE2B_BLOCK_SIZE - HSIG_KEY.len()),
        );

        // The message itself
        prepared.extend(message[..total_length_in_bytes].iter().cloned());

        Ok(prepared)
    }

    /// Bitwise negation. Used once per final chunk, to flip the
    /// finalization lane of the working vector.
    fn not(
        &self,
        input_cell: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedWord64<F>, Error> {
        self.config.negate_config.generate_rows_from_cell(
            region,
            offset,
            input_cell,
            self.config.full_number_u64,
        )
    }

    /// Bitwise xor of two words, copying and decomposing both operands.
    fn xor(
        &self,
        lhs: &AssignedWord64<F>,
        rhs: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        self.config.xor_config.generate_xor_rows_from_cells(region, offset, lhs, rhs)
    }

    /// Bitwise xor reusing the last row of the trace as its first operand,
    /// saving the copy.
    fn xor_reusing_first_operand(
        &self,
        previous_operand: &AssignedRow<F>,
        cell_to_copy: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        self.config.xor_config.generate_xor_rows_reusing_first_operand(
            region,
            offset,
            previous_operand,
            cell_to_copy,
        )
    }

    /// Wrapping addition of two words, with the first operand already
    /// sitting in the last row of the trace. The raw field sum occupies up
    /// to 65 bits; the gate trims it back to 64 with a boolean carry.
    fn add_reusing_first_operand(
        &self,
        previous_cell: &AssignedWord64<F>,
        cell_to_copy: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        let (result_row, _carry) = self.config.addition_config.generate_addition_rows_from_cells(
            region,
            offset,
            previous_cell,
            cell_to_copy,
            true, // Reuses the last trace row
            self.config.full_number_u64,
            self.config.limbs,
        )?;
        Ok(result_row)
    }

    /// Wrapping addition of three words, copying all the operands. The raw
    /// field sum occupies up to 66 bits; the gate trims it back to 64 with a
    /// two-bit carry.
    fn add_triple(
        &self,
        first: &AssignedWord64<F>,
        second: &AssignedWord64<F>,
        third: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        let (result_row, _carry) =
            self.config.addition_config.generate_triple_addition_rows_from_cells(
                region,
                offset,
                first,
                second,
                third,
                false,
                self.config.full_number_u64,
                self.config.limbs,
            )?;
        Ok(result_row)
    }

    /// Like [Self::add_triple], with the first operand already sitting in
    /// the last row of the trace.
    fn add_triple_reusing_first_operand(
        &self,
        previous_cell: &AssignedWord64<F>,
        second: &AssignedWord64<F>,
        third: &AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        let (result_row, _carry) =
            self.config.addition_config.generate_triple_addition_rows_from_cells(
                region,
                offset,
                previous_cell,
                second,
                third,
                true, // Reuses the last trace row
                self.config.full_number_u64,
                self.config.limbs,
            )?;
        Ok(result_row)
    }

    /// Bitwise rotation, 63 bits to the right. Only receives the full number
    /// as input because the gate doesn't need the limbs.
    fn rotate_right_63(
        &self,
        input: AssignedWord64<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedWord64<F>, Error> {
        self.config.rotate_63_config.generate_64_bit_rotation_from_cells(
            region,
            offset,
            &input,
            self.config.full_number_u64,
            self.config.limbs,
        )
    }

    /// Bitwise rotation, 16 bits to the right: a re-indexing of the input
    /// row's limbs by 2 positions.
    fn rotate_right_16(
        &self,
        input_row: AssignedRow<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedWord64<F>, Error> {
        self.config.limb_rotation_config.generate_rotation_rows_from_input_row(
            region,
            offset,
            input_row,
            2,
            self.config.full_number_u64,
            self.config.limbs,
        )
    }

    /// Bitwise rotation, 24 bits to the right: a re-indexing of the input
    /// row's limbs by 3 positions.
    fn rotate_right_24(
        &self,
        input_row: AssignedRow<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedWord64<F>, Error> {
        self.config.limb_rotation_config.generate_rotation_rows_from_input_row(
            region,
            offset,
            input_row,
            3,
            self.config.full_number_u64,
            self.config.limbs,
        )
    }

    /// Bitwise rotation, 32 bits to the right: a re-indexing of the input
    /// row's limbs by 4 positions.
    fn rotate_right_32(
        &self,
        input_row: AssignedRow<F>,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedWord64<F>, Error> {
        self.config.limb_rotation_config.generate_rotation_rows_from_input_row(
            region,
            offset,
            input_row,
            4,
            self.config.full_number_u64,
            self.config.limbs,
        )
    }

    /// Puts in the trace a full decomposition row built from 8 byte cells,
    /// range-checked by the circuit.
    fn new_row_from_assigned_bytes(
        &self,
        bytes: &[AssignedNative<F>; 8],
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<AssignedRow<F>, Error> {
        self.config.q_decompose.enable(region, *offset)?;
        self.config.q_range.enable(region, *offset)?;
        let ret = generate_row_from_assigned_bytes(
            region,
            bytes,
            *offset,
            self.config.full_number_u64,
            self.config.limbs,
        );
        *offset += 1;
        ret
    }

    /// Decodes one 128-byte chunk into its 16 little-endian lanes: 16
    /// decomposition rows whose limbs are copies of the chunk's byte cells,
    /// range-checked and ready for use in the algorithm.
    fn chunk_words_from_bytes(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        chunk: [AssignedNative<F>; BLAKE2B_BLOCK_SIZE],
    ) -> Result<[AssignedRow<F>; 16], Error> {
        let mut chunk_rows_vector: Vec<AssignedRow<F>> = Vec::new();
        for i in 0..16 {
            let bytes: &[AssignedNative<F>; 8] = chunk[i * 8..(i + 1) * 8].try_into().unwrap();
            let current_row_cells = self.new_row_from_assigned_bytes(bytes, region, offset)?;
            chunk_rows_vector.push(current_row_cells);
        }
        let chunk_rows = chunk_rows_vector.try_into().unwrap();
        Ok(chunk_rows)
    }

    /// Assigns a u64 constant to trace[row_offset][limbs[limb_index]].
    fn assign_limb_constant_u64(
        &self,
        region: &mut Region<'_, F>,
        row_offset: &usize,
        description: &str,
        constant: u64,
        limb_index: usize,
    ) -> Result<AssignedWord64<F>, Error> {
        AssignedWord64::assign_fixed_word(
            region,
            description,
            self.config.limbs[limb_index],
            *row_offset,
            constant.into(),
        )
    }
}
