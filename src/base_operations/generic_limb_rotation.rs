use super::*;

/// This gate rotates the limbs of a decomposed word to the right, using copy
/// constraints to tie the output limbs to the input limbs. Since the 32, 24
/// and 16-bit rotations of the mixing function are all whole numbers of
/// limbs, re-indexing the limbs is all they need; no multiplication
/// constraints are generated beyond the decomposition of the output row.
#[derive(Clone, Debug)]
pub(crate) struct LimbRotation {
    pub(crate) q_decompose: Selector,
}

impl LimbRotation {
    pub(crate) fn configure(q_decompose: Selector) -> Self {
        Self { q_decompose }
    }

    /// Receives a row of cells and rotates its limbs to the right by
    /// [limbs_to_rotate_to_the_right] positions, constraining the output row
    /// to be the correct rotation of the input.
    /// For this method to work, the input row must be the last row of the
    /// trace at the moment the method is called.
    pub(crate) fn generate_rotation_rows_from_input_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        input_row: AssignedRow<F>,
        limbs_to_rotate_to_the_right: usize,
        full_number_u64_column: Column<Advice>,
        limbs: [Column<Advice>; 8],
    ) -> Result<AssignedWord64<F>, Error> {
        let result_value =
            Self::right_rotation_value(input_row.full_number.value(), limbs_to_rotate_to_the_right);

        let result_cell = region
            .assign_advice(
                || "Full number rotation output",
                full_number_u64_column,
                *offset,
                || result_value,
            )?
            .into();

        self.q_decompose.enable(region, *offset)?;

        for i in 0..8 {
            // We must subtract limbs_to_rotate_to_the_right because if a number
            // is expressed bitwise as x = l1|l2|...|l7|l8, the limbs are stored
            // as [l8, l7, ..., l2, l1]
            let top_assigned_cell = input_row.limbs[i].clone();
            let out_limb_index = (8 + i - limbs_to_rotate_to_the_right) % 8;
            AssignedByte::copy_advice_byte(
                region,
                "Limb rotation output",
                limbs[out_limb_index],
                *offset,
                top_assigned_cell,
            )?;
        }

        *offset += 1;
        Ok(result_cell)
    }

    /// Computes the actual value of the rotation of the number
    fn right_rotation_value(value: Value<Word64>, limbs_to_rotate: usize) -> Value<Word64> {
        value.map(|input| {
            let bits_to_rotate = limbs_to_rotate * 8;
            rotate_right_word(input, bits_to_rotate)
        })
    }
}
