use super::*;
use num_bigint::BigUint;

/// This config handles the 63-bit right rotation of a 64-bit word, which is
/// the same as a 1-bit rotation to the left. It is the only rotation of the
/// mixing function that is not a whole number of limbs, so it can't be done
/// by re-indexing limbs; instead it uses a quadratic identity over the packed
/// values: doubling the input either equals the output (no wrap) or exceeds
/// it by exactly 2^64 - 1 (wrap of the top bit).
///
/// For the gate of this config to be sound, the modulus of the field must be
/// greater than 2^65.
///
/// The gate assumes the input is already range checked in the circuit. This
/// holds in the context of this hash, because every 63-rotation happens right
/// after a xor operation and reuses the xor's result row, which is range
/// checked by the xor itself.
#[derive(Clone, Debug)]
pub(crate) struct Rotate63Config {
    pub(crate) q_rot63: Selector,
    q_decompose: Selector,
    q_range: Selector,
}

impl Rotate63Config {
    /// The gate that will be used to rotate a number 63 bits to the right
    /// The gate is defined as:
    ///    0 = (2 * input_full_number - output_full_number)
    ///                      * (2 * input_full_number - output_full_number - ((1 << 64) - 1))
    pub(crate) fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        full_number_u64: Column<Advice>,
        q_decompose: Selector,
        q_range: Selector,
    ) -> Self {
        Self::enforce_modulus_size::<F>();

        let q_rot63 = meta.complex_selector();

        meta.create_gate("rotate right 63", |meta| {
            let q_rot63 = meta.query_selector(q_rot63);
            let input_full_number = meta.query_advice(full_number_u64, Rotation(-1));
            let output_full_number = meta.query_advice(full_number_u64, Rotation(0));
            Constraints::without_selector(vec![
                q_rot63
                    * (Expression::Constant(F::from(2)) * input_full_number.clone()
                        - output_full_number.clone())
                    * (Expression::Constant(F::from(2)) * input_full_number
                        - output_full_number
                        - Expression::Constant(F::from(u64::MAX))),
            ])
        });

        Self {
            q_rot63,
            q_decompose,
            q_range,
        }
    }

    /// Receives an [AssignedWord64] placed in the last row of the trace and
    /// generates its rotation in a new decomposition row right below, where
    /// the gate constrains it.
    pub(crate) fn generate_64_bit_rotation_from_cells<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        input: &AssignedWord64<F>,
        full_number_u64: Column<Advice>,
        limbs: [Column<Advice>; 8],
    ) -> Result<AssignedWord64<F>, Error> {
        self.q_rot63.enable(region, *offset)?;
        let result_value = input.value().map(|input| rotate_right_word(input, 63));

        self.q_decompose.enable(region, *offset)?;
        self.q_range.enable(region, *offset)?;
        let result_row =
            generate_row_from_word_value(region, result_value, *offset, full_number_u64, limbs)?;
        *offset += 1;
        Ok(result_row.full_number)
    }

    /// Enforces the field's modulus to be greater than 2^65. This is
    /// necessary to preserve the soundness of a circuit using this operation.
    pub(crate) fn enforce_modulus_size<F: PrimeField>() {
        let modulus_bytes: Vec<u8> = hex::decode(F::MODULUS.trim_start_matches("0x"))
            .expect("Modulus is not a valid hex number");
        let modulus = BigUint::from_bytes_be(&modulus_bytes);
        let two_pow_65 = BigUint::from(1u128 << 65);
        assert!(modulus > two_pow_65, "Field modulus must be greater than 2^65");
    }
}
