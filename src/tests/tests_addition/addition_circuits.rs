use super::super::*;
use crate::base_operations::addition_mod_64::AdditionMod64Config;
use midnight_proofs::circuit::SimpleFloorPlanner;
use midnight_proofs::plonk::Circuit;
use std::array;
use std::marker::PhantomData;

/// Standalone circuit exercising the two-word addition gate over an explicit
/// trace: [x, y (with the carry in its first limb slot), result].
pub(crate) struct AdditionMod64Circuit<F: PrimeField> {
    _ph: PhantomData<F>,
    trace: [[Value<F>; 9]; 3],
}

/// Standalone circuit exercising the three-word addition gate over an
/// explicit trace: [x, y, z (with the carry in its first limb slot), result].
pub(crate) struct TripleAdditionMod64Circuit<F: PrimeField> {
    _ph: PhantomData<F>,
    trace: [[Value<F>; 9]; 4],
}

#[derive(Clone, Debug)]
pub(crate) struct AdditionCircuitConfig<F: PrimeField + Clone> {
    addition_config: AdditionMod64Config,
    decompose_8_config: Decompose8Config,
    _ph: PhantomData<F>,
}

fn configure_addition_circuit<F: PrimeField>(
    meta: &mut ConstraintSystem<F>,
) -> AdditionCircuitConfig<F> {
    let full_number_u64 = meta.advice_column();
    let limbs: [Column<Advice>; 8] = array::from_fn(|_| meta.advice_column());

    let decompose_8_config = Decompose8Config::configure(meta, full_number_u64, limbs);

    let addition_config = AdditionMod64Config::configure(
        meta,
        full_number_u64,
        limbs[0],
        decompose_8_config.q_decompose,
        decompose_8_config.q_range,
    );

    AdditionCircuitConfig {
        _ph: PhantomData,
        decompose_8_config,
        addition_config,
    }
}

impl<F: PrimeField> Circuit<F> for AdditionMod64Circuit<F> {
    type Config = AdditionCircuitConfig<F>;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            _ph: PhantomData,
            trace: [[Value::unknown(); 9]; 3],
        }
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        configure_addition_circuit(meta)
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        config.decompose_8_config.populate_lookup_table(&mut layouter)?;
        config.addition_config.populate_addition_rows(
            &mut layouter,
            self.trace,
            config.decompose_8_config.clone(),
        )
    }
}

impl<F: PrimeField> AdditionMod64Circuit<F> {
    pub(crate) fn new_for_trace(trace: [[Value<F>; 9]; 3]) -> Self {
        Self {
            _ph: PhantomData,
            trace,
        }
    }
}

impl<F: PrimeField> Circuit<F> for TripleAdditionMod64Circuit<F> {
    type Config = AdditionCircuitConfig<F>;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            _ph: PhantomData,
            trace: [[Value::unknown(); 9]; 4],
        }
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        configure_addition_circuit(meta)
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        config.decompose_8_config.populate_lookup_table(&mut layouter)?;
        config.addition_config.populate_triple_addition_rows(
            &mut layouter,
            self.trace,
            config.decompose_8_config.clone(),
        )
    }
}

impl<F: PrimeField> TripleAdditionMod64Circuit<F> {
    pub(crate) fn new_for_trace(trace: [[Value<F>; 9]; 4]) -> Self {
        Self {
            _ph: PhantomData,
            trace,
        }
    }
}

impl AdditionMod64Config {
    /// Populates the trace of one two-word addition from explicit values.
    /// The operand rows only use their full numbers (the second one also
    /// carries the carry cell in its first limb slot); the result row is
    /// fully decomposition-checked, as in the real circuit. Useful for tests
    /// that inject incorrect values and check that the constraints fail.
    fn populate_addition_rows<F: PrimeField>(
        &self,
        layouter: &mut impl Layouter<F>,
        trace: [[Value<F>; 9]; 3],
        decompose_8_config: Decompose8Config,
    ) -> Result<(), Error> {
        layouter.assign_region(
            || "addition",
            |mut region| {
                self.q_add.enable(&mut region, 0)?;

                decompose_8_config.populate_row_from_values(&mut region, &trace[0], 0, true)?;
                // The second operand row holds the carry in its first limb
                // slot, so its limbs are not decomposition-checked
                decompose_8_config.populate_row_from_values(&mut region, &trace[1], 1, false)?;
                decompose_8_config.populate_row_from_values(&mut region, &trace[2], 2, true)?;

                Ok(())
            },
        )
    }

    /// Three-word counterpart of [populate_addition_rows]: the carry lives
    /// in the first limb slot of the third operand row.
    fn populate_triple_addition_rows<F: PrimeField>(
        &self,
        layouter: &mut impl Layouter<F>,
        trace: [[Value<F>; 9]; 4],
        decompose_8_config: Decompose8Config,
    ) -> Result<(), Error> {
        layouter.assign_region(
            || "triple addition",
            |mut region| {
                self.q_add_triple.enable(&mut region, 0)?;

                decompose_8_config.populate_row_from_values(&mut region, &trace[0], 0, true)?;
                decompose_8_config.populate_row_from_values(&mut region, &trace[1], 1, true)?;
                // The third operand row holds the carry in its first limb
                // slot, so its limbs are not decomposition-checked
                decompose_8_config.populate_row_from_values(&mut region, &trace[2], 2, false)?;
                decompose_8_config.populate_row_from_values(&mut region, &trace[3], 3, true)?;

                Ok(())
            },
        )
    }
}
