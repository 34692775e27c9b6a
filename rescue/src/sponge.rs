// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Incremental Rescue-Prime sponge.
//!
//! Field elements are added into the rate part of the state one at a time;
//! each time `rate` of them have been absorbed the permutation runs. On
//! [`RescueHasher::finish`] the message is padded with a single `1` followed
//! by as many `0` as required to fill the block (the `1` is always added,
//! even for an empty message or one whose length is a multiple of the rate),
//! the permutation runs once more and the first `digest_size` rate elements
//! are the digest.

use crate::{
    errors::RescueError,
    field::{FieldElement, PrimeField},
    param::RescueConfig,
    permutation::Permutation,
    structs::RescueVector,
};
use ark_std::{end_timer, format, start_timer, string::String, sync::Arc, vec::Vec};
use itertools::Itertools;

/// Lifecycle of a [`RescueHasher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongePhase {
    /// Accepting input.
    Absorbing,
    /// Digest was produced; the hasher accepts nothing further.
    Finished,
}

/// A Rescue-Prime hash computation in progress.
///
/// The permutation (and its constants) is shared, the state is owned. Hash
/// independent messages with independent hashers; they may share one
/// [`Permutation`] through [`RescueHasher::from_permutation`].
#[derive(Clone, Debug)]
pub struct RescueHasher {
    perm: Arc<Permutation>,
    state: RescueVector,
    // next rate position to absorb into, always < rate
    absorb_pos: usize,
    permutations: usize,
    phase: SpongePhase,
}

impl RescueHasher {
    /// Validate the parameters, derive the permutation and start from the
    /// all-zero state.
    pub fn new(field: PrimeField, config: RescueConfig) -> Result<Self, RescueError> {
        let perm = Permutation::new(field, config)?;
        Ok(Self::from_permutation(Arc::new(perm)))
    }

    /// Text-facing constructor: modulus and primitive element as decimal
    /// strings, default security level.
    pub fn new_from_str(
        modulus: &str,
        primitive_element: &str,
        capacity: usize,
        state_width: usize,
        rounds: usize,
        digest_size: usize,
    ) -> Result<Self, RescueError> {
        let field = PrimeField::from_decimal_strs(modulus, primitive_element)?;
        let config = RescueConfig::new(state_width, capacity, rounds, digest_size);
        Self::new(field, config)
    }

    /// Start a hash over an already built permutation.
    pub fn from_permutation(perm: Arc<Permutation>) -> Self {
        let state = RescueVector::zero(perm.field(), perm.config().state_width);
        Self {
            perm,
            state,
            absorb_pos: 0,
            permutations: 0,
            phase: SpongePhase::Absorbing,
        }
    }

    /// The permutation backing this hasher.
    pub fn permutation(&self) -> &Arc<Permutation> {
        &self.perm
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SpongePhase {
        self.phase
    }

    /// Number of times the permutation has run on this hasher's state.
    pub fn permutation_count(&self) -> usize {
        self.permutations
    }

    /// Absorb one message token, a decimal integer reduced mod `p`.
    /// A token that does not parse leaves the hasher untouched.
    pub fn update(&mut self, token: &str) -> Result<(), RescueError> {
        self.ensure_absorbing("update")?;
        let elem = self.perm.field().parse_element(token)?;
        self.absorb_unchecked(&elem);
        Ok(())
    }

    /// Absorb one field element.
    pub fn absorb(&mut self, elem: &FieldElement) -> Result<(), RescueError> {
        self.ensure_absorbing("absorb")?;
        let elem = self.perm.field().reduce(elem.as_biguint().clone());
        self.absorb_unchecked(&elem);
        Ok(())
    }

    /// Absorb a sequence of field elements.
    pub fn absorb_elems(&mut self, elems: &[FieldElement]) -> Result<(), RescueError> {
        elems.iter().try_for_each(|elem| self.absorb(elem))
    }

    /// Pad, permute and return the digest as space-separated decimal
    /// integers.
    pub fn finish(&mut self) -> Result<String, RescueError> {
        Ok(self.finish_elements()?.iter().join(" "))
    }

    /// Same as [`Self::finish`], returning the digest field elements.
    pub fn finish_elements(&mut self) -> Result<Vec<FieldElement>, RescueError> {
        self.ensure_absorbing("finish")?;
        let timer = start_timer!(|| "Rescue-XLIX finish");

        let one = self.perm.field().one();
        self.absorb_unchecked(&one);
        if self.absorb_pos != 0 {
            self.permute();
        }

        let digest_size = self.perm.config().digest_size;
        let digest = self.state.vec[..digest_size].to_vec();
        self.phase = SpongePhase::Finished;

        end_timer!(timer);
        Ok(digest)
    }
}

impl RescueHasher {
    fn ensure_absorbing(&self, op: &str) -> Result<(), RescueError> {
        match self.phase {
            SpongePhase::Absorbing => Ok(()),
            SpongePhase::Finished => Err(RescueError::InvalidState(format!(
                "{} called after the digest was produced",
                op
            ))),
        }
    }

    // `elem` must already be reduced.
    fn absorb_unchecked(&mut self, elem: &FieldElement) {
        self.perm
            .field()
            .add_assign(&mut self.state.vec[self.absorb_pos], elem);
        self.absorb_pos += 1;
        if self.absorb_pos == self.perm.config().rate() {
            self.permute();
        }
    }

    fn permute(&mut self) {
        self.perm.permute(&mut self.state);
        self.absorb_pos = 0;
        self.permutations += 1;
    }
}
