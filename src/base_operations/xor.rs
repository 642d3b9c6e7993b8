use super::*;

/// This config handles the bitwise xor of two 64-bit words. It works over the
/// 8-bit limb representation of the operands, with a lookup table that
/// precomputes the xor of every pair of bytes:
///
/// | lhs | rhs | lhs xor rhs |
/// |  0  |  0  |      0      |
/// |  0  |  1  |      1      |
/// ...
/// | 255 | 255 |      0      |
///
/// The table has 2^8 * 2^8 = 2^16 rows, one per combination of 8-bit
/// operands. The final representation in the trace is three consecutive
/// decomposition rows:
///
/// | full_number_lhs    | limb_0_lhs    | ... | limb_7_lhs    |
/// | full_number_rhs    | limb_0_rhs    | ... | limb_7_rhs    |
/// | full_number_result | limb_0_result | ... | limb_7_result |
///
/// with one lookup per limb column tying the three rows together.
#[derive(Clone, Debug)]
pub(crate) struct XorConfig {
    /// Lookup table columns
    t_xor_left: TableColumn,
    t_xor_right: TableColumn,
    t_xor_out: TableColumn,

    /// Selector for the xor lookups
    pub(crate) q_xor: Selector,

    /// Columns and selectors of the decomposition rows, owned by the chip
    full_number_u64: Column<Advice>,
    limbs: [Column<Advice>; 8],
    q_decompose: Selector,
    q_range: Selector,
}

impl XorConfig {
    pub(crate) fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        full_number_u64: Column<Advice>,
        limbs: [Column<Advice>; 8],
        q_decompose: Selector,
        q_range: Selector,
    ) -> Self {
        let q_xor = meta.complex_selector();
        let t_xor_left = meta.lookup_table_column();
        let t_xor_right = meta.lookup_table_column();
        let t_xor_out = meta.lookup_table_column();

        // One lookup per limb. The 64-bit results are tied to the limbs by
        // the decomposition gate enabled on each of the three rows.
        for limb in limbs {
            meta.lookup(format!("xor lookup limb {limb:?}"), |meta| {
                let left: Expression<F> = meta.query_advice(limb, Rotation(0));
                let right: Expression<F> = meta.query_advice(limb, Rotation(1));
                let out: Expression<F> = meta.query_advice(limb, Rotation(2));
                let q_xor = meta.query_selector(q_xor);
                vec![
                    (q_xor.clone() * left, t_xor_left),
                    (q_xor.clone() * right, t_xor_right),
                    (q_xor * out, t_xor_out),
                ]
            });
        }

        Self {
            t_xor_left,
            t_xor_right,
            t_xor_out,
            q_xor,
            full_number_u64,
            limbs,
            q_decompose,
            q_range,
        }
    }

    /// Populates the xor lookup table. Must be called only once per circuit.
    pub(crate) fn populate_xor_lookup_table<F: PrimeField>(
        &self,
        layouter: &mut impl Layouter<F>,
    ) -> Result<(), Error> {
        layouter.assign_table(
            || "xor check table",
            |mut table| {
                for left in 0..256 {
                    for right in 0..256 {
                        let index = left * 256 + right;
                        let result = left ^ right;
                        table.assign_cell(
                            || "left_value",
                            self.t_xor_left,
                            index,
                            || Value::known(F::from(left as u64)),
                        )?;
                        table.assign_cell(
                            || "right_value",
                            self.t_xor_right,
                            index,
                            || Value::known(F::from(right as u64)),
                        )?;
                        table.assign_cell(
                            || "out_value",
                            self.t_xor_out,
                            index,
                            || Value::known(F::from(result as u64)),
                        )?;
                    }
                }
                Ok(())
            },
        )?;
        Ok(())
    }

    /// Generates the three xor rows in the trace, copying and decomposing
    /// both operands.
    pub(crate) fn generate_xor_rows_from_cells<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedWord64<F>,
        rhs: &AssignedWord64<F>,
    ) -> Result<AssignedRow<F>, Error> {
        self.q_xor.enable(region, *offset)?;

        self.generate_decomposed_operand_row(region, offset, lhs)?;
        self.generate_decomposed_operand_row(region, offset, rhs)?;
        self.generate_xor_result_row(region, offset, lhs, rhs)
    }

    /// Like [generate_xor_rows_from_cells], but takes advantage of the last
    /// row in the trace being one of the operands, already decomposed in
    /// limbs. Only the second operand and the result produce new rows.
    /// The caller must guarantee that [previous_operand] is the row right
    /// above the current offset.
    pub(crate) fn generate_xor_rows_reusing_first_operand<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        previous_operand: &AssignedRow<F>,
        cell_to_copy: &AssignedWord64<F>,
    ) -> Result<AssignedRow<F>, Error> {
        self.q_xor.enable(region, *offset - 1)?;

        self.generate_decomposed_operand_row(region, offset, cell_to_copy)?;
        self.generate_xor_result_row(region, offset, &previous_operand.full_number, cell_to_copy)
    }

    /// Copies a word into a new fully-constrained decomposition row.
    fn generate_decomposed_operand_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        operand: &AssignedWord64<F>,
    ) -> Result<AssignedRow<F>, Error> {
        self.q_decompose.enable(region, *offset)?;
        self.q_range.enable(region, *offset)?;
        let row =
            generate_row_from_cell(region, operand, *offset, self.full_number_u64, self.limbs)?;
        *offset += 1;
        Ok(row)
    }

    /// Computes the xor result value and assigns its decomposition row.
    fn generate_xor_result_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedWord64<F>,
        rhs: &AssignedWord64<F>,
    ) -> Result<AssignedRow<F>, Error> {
        let result_value = lhs.value().zip(rhs.value()).map(|(l, r)| l ^ r);

        self.q_decompose.enable(region, *offset)?;
        self.q_range.enable(region, *offset)?;
        let result_row = generate_row_from_word_value(
            region,
            result_value,
            *offset,
            self.full_number_u64,
            self.limbs,
        )?;
        *offset += 1;
        Ok(result_row)
    }
}
