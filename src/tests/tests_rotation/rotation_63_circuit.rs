use super::super::*;
use crate::base_operations::rotate_63::Rotate63Config;
use midnight_proofs::circuit::SimpleFloorPlanner;
use midnight_proofs::plonk::Circuit;
use std::array;
use std::marker::PhantomData;

/// Standalone circuit exercising the 63-bit rotation gate over an explicit
/// trace of input and output rows.
#[derive(Clone)]
pub(crate) struct Rotation63Circuit<F: PrimeField> {
    _ph: PhantomData<F>,
    trace: [[Value<F>; 9]; 2],
}

#[derive(Clone, Debug)]
pub(crate) struct Rotation63CircuitConfig<F: PrimeField> {
    _ph: PhantomData<F>,
    decompose_8_config: Decompose8Config,
    rotate_63_config: Rotate63Config,
}

impl<F: PrimeField> Rotation63Circuit<F> {
    pub(crate) fn new_for_trace(trace: [[Value<F>; 9]; 2]) -> Self {
        Self {
            _ph: PhantomData,
            trace,
        }
    }
}

impl<F: PrimeField> Circuit<F> for Rotation63Circuit<F> {
    type Config = Rotation63CircuitConfig<F>;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            _ph: PhantomData,
            trace: [[Value::unknown(); 9]; 2],
        }
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        let full_number_u64 = meta.advice_column();
        let limbs: [Column<Advice>; 8] = array::from_fn(|_| meta.advice_column());

        let decompose_8_config = Decompose8Config::configure(meta, full_number_u64, limbs);
        let rotate_63_config = Rotate63Config::configure(
            meta,
            full_number_u64,
            decompose_8_config.q_decompose,
            decompose_8_config.q_range,
        );

        Self::Config {
            _ph: PhantomData,
            decompose_8_config,
            rotate_63_config,
        }
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        config.decompose_8_config.populate_lookup_table(&mut layouter)?;
        config.rotate_63_config.populate_rotation_rows(
            &mut layouter,
            &config.decompose_8_config,
            self.trace,
        )
    }
}

impl Rotate63Config {
    /// Receives a rotation trace (input row and output row) and populates the
    /// circuit with it, the gate constraining the output against the input.
    /// Useful for tests that inject incorrect values and check that the
    /// constraints fail.
    fn populate_rotation_rows<F: PrimeField>(
        &self,
        layouter: &mut impl Layouter<F>,
        decompose_config: &Decompose8Config,
        trace: [[Value<F>; 9]; 2],
    ) -> Result<(), Error> {
        layouter.assign_region(
            || "rotate 63",
            |mut region| {
                decompose_config.populate_row_from_values(&mut region, &trace[0], 0, true)?;
                self.q_rot63.enable(&mut region, 1)?;
                decompose_config.populate_row_from_values(&mut region, &trace[1], 1, true)?;
                Ok(())
            },
        )?;
        Ok(())
    }
}
