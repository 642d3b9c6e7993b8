use super::*;

/// This config handles the bitwise negation of a 64-bit word, which the hash
/// uses once per message: flipping the finalization lane of the last chunk.
///
/// The gate assumes that the input is already range checked in the circuit.
/// This holds in the context of this hash, where the negated cell is always
/// one of the initialization-vector constants, and lets us avoid duplicate
/// constraints over input and result.
#[derive(Clone, Debug)]
pub(crate) struct NegateConfig {
    pub(crate) q_negate: Selector,
}

impl NegateConfig {
    /// The gate that will be used to negate a number
    /// The gate is defined as:
    ///    negate = (1 << 64) - 1 - value - not_value
    pub(crate) fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        full_number_u64: Column<Advice>,
    ) -> Self {
        let q_negate = meta.complex_selector();

        meta.create_gate("negate", |meta| {
            let q_negate = meta.query_selector(q_negate);
            let value = meta.query_advice(full_number_u64, Rotation(0));
            let not_value = meta.query_advice(full_number_u64, Rotation(1));

            Constraints::without_selector(vec![
                q_negate
                    * (Expression::Constant(F::from_u128((1u128 << 64) - 1)) - value - not_value),
            ])
        });

        Self { q_negate }
    }

    /// Receives an [AssignedWord64] and a [full_number_column] where it will
    /// be copied. The result is placed in the next row of the same column and
    /// constrained by the gate.
    pub(crate) fn generate_rows_from_cell<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        input: &AssignedWord64<F>,
        full_number_column: Column<Advice>,
    ) -> Result<AssignedWord64<F>, Error> {
        self.q_negate.enable(region, *offset)?;
        input.copy_advice_word(region, full_number_column, *offset, "Negation input")?;
        *offset += 1;

        let result_value: Value<Word64> = input.value().map(|input| Word64(u64::MAX) - input);

        let result_cell = region
            .assign_advice(|| "Negation output", full_number_column, *offset, || result_value)?
            .into();

        *offset += 1;
        Ok(result_cell)
    }
}
