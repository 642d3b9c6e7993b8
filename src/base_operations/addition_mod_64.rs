use super::*;
use crate::types::bit::AssignedBit;
use crate::types::carry::AssignedCarry;

/// Config used to constrain wrapping addition over 64-bit words. It carries
/// two gates, one per operand count:
///
/// * Two words: the raw field sum fits in 65 bits, so the high part is a
///   boolean carry.
/// * Three words (used when a message word joins the sum): the raw field sum
///   fits in 66 bits, so the carry is in [0, 2].
///
/// In both cases the result row is decomposed in limbs and range checked,
/// which pins the result below 2^64 and therefore pins the carry cell to the
/// true mathematical carry of the sum. Skipping either half of this would
/// leave the addition unconstrained against field overflow.
#[derive(Clone, Debug)]
pub(crate) struct AdditionMod64Config {
    carry: Column<Advice>,
    pub(crate) q_add: Selector,
    pub(crate) q_add_triple: Selector,
    q_decompose: Selector,
    q_range: Selector,
}

impl AdditionMod64Config {
    /// Creates the necessary gates for the operation to be constrained
    pub(crate) fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        full_number_u64: Column<Advice>,
        carry: Column<Advice>,
        q_decompose: Selector,
        q_range: Selector,
    ) -> Self {
        let q_add = meta.complex_selector();
        let q_add_triple = meta.complex_selector();

        // The gate that checks the sum of two numbers mod 2^64:
        //     full_number_result - full_number_x - full_number_y
        //                        + carry * (1 << 64) = 0
        //     carry * (1 - carry) = 0
        //
        // The full number result is range checked to be a 64-bit number via
        // the q_decompose and q_range selectors enabled on its row.
        meta.create_gate("sum of two words mod 2 ^ 64", |meta| {
            let q_add = meta.query_selector(q_add);
            let full_number_x = meta.query_advice(full_number_u64, Rotation(0));
            let full_number_y = meta.query_advice(full_number_u64, Rotation(1));
            let full_number_result = meta.query_advice(full_number_u64, Rotation(2));
            let carry = meta.query_advice(carry, Rotation(1));

            Constraints::without_selector(vec![
                q_add.clone()
                    * (full_number_result - full_number_x - full_number_y
                        + carry.clone() * (Expression::Constant(F::from_u128(1u128 << 64)))),
                q_add * carry.clone() * (Expression::Constant(F::from_u128(1u128)) - carry),
            ])
        });

        // Same shape with one more operand row. The sum of three 64-bit words
        // is at most 3 * (2^64 - 1) < 2^66, so the carry occupies two bits:
        //     full_number_result - x - y - z + carry * (1 << 64) = 0
        //     carry * (carry - 1) * (carry - 2) = 0
        meta.create_gate("sum of three words mod 2 ^ 64", |meta| {
            let q_add_triple = meta.query_selector(q_add_triple);
            let full_number_x = meta.query_advice(full_number_u64, Rotation(0));
            let full_number_y = meta.query_advice(full_number_u64, Rotation(1));
            let full_number_z = meta.query_advice(full_number_u64, Rotation(2));
            let full_number_result = meta.query_advice(full_number_u64, Rotation(3));
            let carry = meta.query_advice(carry, Rotation(2));

            Constraints::without_selector(vec![
                q_add_triple.clone()
                    * (full_number_result - full_number_x - full_number_y - full_number_z
                        + carry.clone() * (Expression::Constant(F::from_u128(1u128 << 64)))),
                q_add_triple
                    * carry.clone()
                    * (carry.clone() - Expression::Constant(F::from_u128(1u128)))
                    * (carry - Expression::Constant(F::from_u128(2u128))),
            ])
        });

        Self {
            carry,
            q_add,
            q_add_triple,
            q_decompose,
            q_range,
        }
    }

    /// Receives two word cells, copies their values into the trace and writes
    /// the result and carry of the addition in a third row.
    ///
    /// When one of the operands (previous_cell) is the last cell generated in
    /// the circuit, setting [use_last_cell_as_first_operand] to [true] avoids
    /// copying it again and saves one row per addition.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn generate_addition_rows_from_cells<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        previous_cell: &AssignedWord64<F>,
        cell_to_copy: &AssignedWord64<F>,
        use_last_cell_as_first_operand: bool,
        full_number_u64_column: Column<Advice>,
        limbs: [Column<Advice>; 8],
    ) -> Result<(AssignedRow<F>, AssignedBit<F>), Error> {
        let (result_value, carry_value) =
            Self::calculate_result_and_carry(previous_cell.value(), cell_to_copy.value());
        let offset_to_enable = *offset - if use_last_cell_as_first_operand { 1 } else { 0 };
        self.q_add.enable(region, offset_to_enable)?;

        if !use_last_cell_as_first_operand {
            previous_cell.copy_advice_word(
                region,
                full_number_u64_column,
                *offset,
                "Sum first operand",
            )?;
            *offset += 1;
        }
        cell_to_copy.copy_advice_word(
            region,
            full_number_u64_column,
            *offset,
            "Sum second operand",
        )?;

        let carry_cell =
            AssignedBit::assign_advice_bit(region, "carry", self.carry, *offset, carry_value)?;
        *offset += 1;

        self.q_decompose.enable(region, *offset)?;
        self.q_range.enable(region, *offset)?;
        let result_row = generate_row_from_word_value(
            region,
            result_value,
            *offset,
            full_number_u64_column,
            limbs,
        )?;
        *offset += 1;

        Ok((result_row, carry_cell))
    }

    /// Three-operand counterpart of [generate_addition_rows_from_cells]. The
    /// operands are laid out in three consecutive rows, the two-bit carry
    /// lives next to the last operand and the result row closes the gate.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn generate_triple_addition_rows_from_cells<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        previous_cell: &AssignedWord64<F>,
        second_cell: &AssignedWord64<F>,
        third_cell: &AssignedWord64<F>,
        use_last_cell_as_first_operand: bool,
        full_number_u64_column: Column<Advice>,
        limbs: [Column<Advice>; 8],
    ) -> Result<(AssignedRow<F>, AssignedCarry<F>), Error> {
        let (result_value, carry_value) = Self::calculate_triple_result_and_carry(
            previous_cell.value(),
            second_cell.value(),
            third_cell.value(),
        );
        let offset_to_enable = *offset - if use_last_cell_as_first_operand { 1 } else { 0 };
        self.q_add_triple.enable(region, offset_to_enable)?;

        if !use_last_cell_as_first_operand {
            previous_cell.copy_advice_word(
                region,
                full_number_u64_column,
                *offset,
                "Sum first operand",
            )?;
            *offset += 1;
        }
        second_cell.copy_advice_word(
            region,
            full_number_u64_column,
            *offset,
            "Sum second operand",
        )?;
        *offset += 1;

        third_cell.copy_advice_word(
            region,
            full_number_u64_column,
            *offset,
            "Sum third operand",
        )?;
        let carry_cell =
            AssignedCarry::assign_advice_carry(region, "carry", self.carry, *offset, carry_value)?;
        *offset += 1;

        self.q_decompose.enable(region, *offset)?;
        self.q_range.enable(region, *offset)?;
        let result_row = generate_row_from_word_value(
            region,
            result_value,
            *offset,
            full_number_u64_column,
            limbs,
        )?;
        *offset += 1;

        Ok((result_row, carry_cell))
    }

    /// Given 2 operand values, known at proof generation time, returns the
    /// values holding the result of the sum mod 2^64 and the carry value,
    /// which must be 0 or 1. Both ranges will be constrained by the gate.
    fn calculate_result_and_carry<F: PrimeField>(
        lhs: Value<Word64>,
        rhs: Value<Word64>,
    ) -> (Value<Word64>, Value<F>) {
        let result_value = lhs.zip(rhs).map(|(l, r)| Self::sum_mod_64(&[l, r]));
        let carry_value = lhs.zip(rhs).map(|(l, r)| Self::carry_mod_64(&[l, r]));
        (result_value, carry_value)
    }

    /// Given 3 operand values, known at proof generation time, returns the
    /// values holding the result of the sum mod 2^64 and the carry value,
    /// which must be in [0, 2]. Both ranges will be constrained by the gate.
    fn calculate_triple_result_and_carry<F: PrimeField>(
        first: Value<Word64>,
        second: Value<Word64>,
        third: Value<Word64>,
    ) -> (Value<Word64>, Value<F>) {
        let result_value =
            first.zip(second).zip(third).map(|((x, y), z)| Self::sum_mod_64(&[x, y, z]));
        let carry_value =
            first.zip(second).zip(third).map(|((x, y), z)| Self::carry_mod_64(&[x, y, z]));
        (result_value, carry_value)
    }

    fn sum_mod_64(operands: &[Word64]) -> Word64 {
        let sum: u128 = operands.iter().map(|word| word.0 as u128).sum();
        ((sum % (1u128 << 64)) as u64).into()
    }

    fn carry_mod_64<F: PrimeField>(operands: &[Word64]) -> F {
        let sum: u128 = operands.iter().map(|word| word.0 as u128).sum();
        F::from((sum / (1u128 << 64)) as u64)
    }
}
