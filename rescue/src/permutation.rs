// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! The Rescue-XLIX permutation.

use crate::{
    errors::RescueError,
    field::{FieldElement, PrimeField},
    param::{RescueConfig, ALPHA},
    rescue_constants::{mds_matrix, round_constants},
    structs::{RescueMatrix, RescueVector},
};
use ark_std::{end_timer, format, start_timer, vec::Vec};
use num_bigint::BigUint;

/// A Rescue-XLIX permutation instance: field, shape, MDS matrix and round
/// constants. Immutable once built, so one instance can back any number of
/// hashers (wrap it in an `Arc`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    field: PrimeField,
    config: RescueConfig,
    alpha: BigUint,
    mds: RescueMatrix,
    round_constants: Vec<RescueVector>,
}

impl Permutation {
    /// Validate `config` against `field` and derive the constants.
    pub fn new(field: PrimeField, config: RescueConfig) -> Result<Self, RescueError> {
        config.validate()?;
        let timer = start_timer!(|| format!(
            "Rescue-XLIX permutation setup: m = {}, capacity = {}, N = {}",
            config.state_width, config.capacity, config.rounds
        ));

        let mds = mds_matrix(&field, config.state_width)?;
        let round_constants = round_constants(&field, &config)?;

        end_timer!(timer);
        Ok(Self {
            field,
            config,
            alpha: BigUint::from(ALPHA),
            mds,
            round_constants,
        })
    }

    /// The default instance over `p = 1 + 407 * 2^119`.
    pub fn default_params() -> Result<Self, RescueError> {
        Self::new(PrimeField::default_field(), RescueConfig::default())
    }

    /// The underlying field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The shape this permutation was built for.
    pub fn config(&self) -> &RescueConfig {
        &self.config
    }

    /// The MDS matrix.
    pub fn mds(&self) -> &RescueMatrix {
        &self.mds
    }

    /// The `2 * rounds` round-constant vectors.
    pub fn round_constants(&self) -> &[RescueVector] {
        &self.round_constants
    }

    /// `x^ALPHA`
    pub fn sbox(&self, x: &FieldElement) -> FieldElement {
        self.field.pow(x, &self.alpha)
    }

    /// `x^{1/ALPHA}`, the inverse of [`Self::sbox`]. Both fix 0.
    pub fn inverse_sbox(&self, x: &FieldElement) -> FieldElement {
        self.field.pow(x, self.field.inverse_exponent())
    }

    /// Compute the permutation on RescueVector `input`. Fails with
    /// `InvalidInput` unless `input` has exactly `state_width` elements.
    pub fn eval(&self, input: &RescueVector) -> Result<RescueVector, RescueError> {
        let mut state = input.clone();
        self.eval_in_place(&mut state)?;
        Ok(state)
    }

    /// Compute the permutation in place, same width requirement as
    /// [`Self::eval`].
    pub fn eval_in_place(&self, state: &mut RescueVector) -> Result<(), RescueError> {
        if state.len() != self.config.state_width {
            return Err(RescueError::InvalidInput(format!(
                "state has {} elements, the permutation expects {}",
                state.len(),
                self.config.state_width
            )));
        }
        self.permute(state);
        Ok(())
    }

    // `state` must have `state_width` elements.
    pub(crate) fn permute(&self, state: &mut RescueVector) {
        for round in self.round_constants.chunks_exact(2) {
            state.non_linear(&self.field, &self.alpha, &self.mds, &round[0]);
            state.non_linear(
                &self.field,
                self.field.inverse_exponent(),
                &self.mds,
                &round[1],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::RngCore;
    use jf_utils::test_rng;

    const ZERO_STATE_OUTPUT: [&str; 12] = [
        "75975018672987572339192319230509079866",
        "243998432001734240639035538164596395689",
        "122910623125426480474564147781245308241",
        "70133792346221110613137713705292823411",
        "36733160146670854181180946014531406694",
        "144987753571520187052412431251400624835",
        "194594300137912787415119516754342901069",
        "119982014694162909829708064269690038344",
        "21805056309016039203486444315847281663",
        "253071263815868650888271066879374389625",
        "137452698545815091426534542796951130578",
        "135921557000959064323271445642981801389",
    ];

    #[test]
    fn zero_state_vector() {
        let perm = Permutation::default_params().unwrap();
        let out = perm.eval(&RescueVector::zero(perm.field(), 12)).unwrap();
        let out: Vec<_> = out.elems().iter().map(|e| e.to_string()).collect();
        assert_eq!(out, ZERO_STATE_OUTPUT);
    }

    #[test]
    fn eval_is_deterministic() {
        let perm = Permutation::default_params().unwrap();
        let field = perm.field().clone();
        let mut rng = test_rng();
        for _ in 0..5 {
            let input: RescueVector = (0..12)
                .map(|_| {
                    let mut bytes = [0u8; 20];
                    rng.fill_bytes(&mut bytes);
                    field.from_le_bytes_mod_order(&bytes)
                })
                .collect::<Vec<_>>()
                .into();
            let a = perm.eval(&input).unwrap();
            let b = perm.eval(&input).unwrap();
            assert_eq!(a, b);
            assert_ne!(a, input);

            let mut in_place = input.clone();
            perm.eval_in_place(&mut in_place).unwrap();
            assert_eq!(in_place, a);
        }
    }

    #[test]
    fn rejects_state_of_wrong_width() {
        let perm = Permutation::default_params().unwrap();
        for width in [0, 11, 13] {
            let mut state = RescueVector::zero(perm.field(), width);
            assert!(matches!(
                perm.eval(&state),
                Err(RescueError::InvalidInput(_))
            ));
            assert!(matches!(
                perm.eval_in_place(&mut state),
                Err(RescueError::InvalidInput(_))
            ));
            assert_eq!(state, RescueVector::zero(perm.field(), width));
        }
    }

    #[test]
    fn sbox_round_trip() {
        let perm = Permutation::new(
            PrimeField::from_decimal_strs("103", "5").unwrap(),
            RescueConfig::new(3, 1, 2, 2),
        )
        .unwrap();
        let field = perm.field();
        // exhaustive over the small field, 0 included
        for a in 0..103u64 {
            let a = field.from_u64(a);
            assert_eq!(perm.inverse_sbox(&perm.sbox(&a)), a);
            assert_eq!(perm.sbox(&perm.inverse_sbox(&a)), a);
        }
        assert!(perm.sbox(&field.zero()).is_zero());
        assert!(perm.inverse_sbox(&field.zero()).is_zero());
    }

    #[test]
    fn constants_shape() {
        let perm = Permutation::default_params().unwrap();
        assert_eq!(perm.round_constants().len(), 2 * 7);
        assert_eq!(perm.mds().len(), 12);
        assert_eq!(perm.config(), &RescueConfig::default());
    }

    #[test]
    fn invalid_setup() {
        let field = PrimeField::default_field();
        assert!(matches!(
            Permutation::new(field.clone(), RescueConfig::new(4, 4, 7, 1)),
            Err(RescueError::ConfigurationError(_))
        ));
        assert!(matches!(
            Permutation::new(
                PrimeField::from_decimal_strs("103", "102").unwrap(),
                RescueConfig::new(3, 1, 2, 1)
            ),
            Err(RescueError::ConfigurationError(_))
        ));
        assert_eq!(
            Permutation::new(field, RescueConfig::default()).unwrap(),
            Permutation::default_params().unwrap()
        );
    }
}
