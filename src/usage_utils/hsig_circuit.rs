//! This is an example circuit of how the hSig chip should be used.

use crate::hsig::hsig_chip::{HsigChip, HsigConfig};
use crate::hsig::utils::{enforce_length_consistency, OUTPUT_LENGTH_IN_BYTES};
use crate::types::AssignedNative;
use ff::PrimeField;
use midnight_proofs::circuit::{Layouter, SimpleFloorPlanner, Value};
use midnight_proofs::plonk::{Advice, Circuit, Column, ConstraintSystem, Error, Instance};
use std::array;
use std::marker::PhantomData;

/// The circuit struct. It holds the message that will be hashed, plus the
/// shape of the input, which must be known at circuit building time: how
/// many bits each input element carries and how many bytes the message
/// declares. The key is not part of the inputs, it is fixed inside the chip.
#[derive(Clone, Debug)]
pub struct HsigCircuit<F: PrimeField> {
    /// The message bytes should be unknown to the verifier.
    message: Vec<Value<F>>,
    /// All the sizes should be known at circuit building time, so we don't
    /// store them as values.
    bit_width_per_input_element: usize,
    total_length_in_bytes: usize,
    /// Reserved flag, accepted for interface compatibility and ignored.
    binary_output: bool,
    /// Whether the message may need zero padding up to a whole chunk. Only
    /// participates in the construction-time validation.
    padding_required: bool,
}

/// The configuration of the circuit: the chip doing the hashing and the
/// instance column holding the expected digest bytes.
#[derive(Clone, Debug)]
pub struct HsigCircuitConfig<F: PrimeField> {
    _ph: PhantomData<F>,
    /// The chip configuration. We only need this.
    hsig_config: HsigConfig,
    /// Column that will hold the expected digest in the form of public inputs
    expected_digest: Column<Instance>,
    limbs: [Column<Advice>; 8],
}

impl<F: PrimeField> Circuit<F> for HsigCircuit<F> {
    type Config = HsigCircuitConfig<F>;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            message: vec![Value::unknown(); self.message.len()],
            bit_width_per_input_element: self.bit_width_per_input_element,
            total_length_in_bytes: self.total_length_in_bytes,
            binary_output: self.binary_output,
            padding_required: self.padding_required,
        }
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        let constants = meta.fixed_column();

        let full_number_u64 = meta.advice_column();
        let limbs: [Column<Advice>; 8] = array::from_fn(|_| meta.advice_column());

        let expected_digest = meta.instance_column();
        meta.enable_equality(expected_digest);

        // We need to provide the chip with the columns it will use.
        let hsig_config = HsigChip::configure(meta, constants, full_number_u64, limbs);

        Self::Config {
            _ph: PhantomData,
            hsig_config,
            expected_digest,
            limbs,
        }
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        // The message bytes are assigned in the circuit before calling the
        // hash function. They're not constrained to the range [0,255] here,
        // but they are when used inside the chip.
        let assigned_message =
            Self::assign_message_to_the_trace(config.clone(), &mut layouter, &self.message)?;

        let hsig_chip = HsigChip::new(&config.hsig_config);
        hsig_chip.load(&mut layouter)?;

        // Call to the hash function
        let digest =
            hsig_chip.hsig(&mut layouter, &assigned_message, self.total_length_in_bytes)?;

        // Assert results
        for (i, digest_byte_cell) in digest.iter().enumerate().take(OUTPUT_LENGTH_IN_BYTES) {
            layouter.constrain_instance(digest_byte_cell.cell(), config.expected_digest, i)?;
        }
        Ok(())
    }
}

impl<F: PrimeField> HsigCircuit<F> {
    /// Creates a new instance of the circuit for the given message and
    /// declared shape. Fails right here, at construction time, if the
    /// declared byte length is inconsistent with the number of input
    /// elements and their bit width; an inconsistent gadget is never wired
    /// into a circuit.
    pub fn new_for(
        message: Vec<Value<F>>,
        bit_width_per_input_element: usize,
        total_length_in_bytes: usize,
        binary_output: bool,
        padding_required: bool,
    ) -> Self {
        enforce_length_consistency(
            message.len(),
            bit_width_per_input_element,
            total_length_in_bytes,
            padding_required,
        );
        Self {
            message,
            bit_width_per_input_element,
            total_length_in_bytes,
            binary_output,
            padding_required,
        }
    }

    /// Here the message bytes are stored in the trace. It doesn't really
    /// matter how they're stored; this circuit uses the limb columns to do
    /// it, but that's arbitrary.
    fn assign_message_to_the_trace(
        config: HsigCircuitConfig<F>,
        layouter: &mut impl Layouter<F>,
        message: &[Value<F>],
    ) -> Result<Vec<AssignedNative<F>>, Error> {
        layouter.assign_region(
            || "message bytes",
            |mut region| {
                message
                    .iter()
                    .enumerate()
                    .map(|(index, message_byte)| {
                        let row = index / 8;
                        let column = index % 8;
                        region.assign_advice(
                            || format!("Message byte {index}"),
                            config.limbs[column],
                            row,
                            || *message_byte,
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()
            },
        )
    }
}
