use crate::errors::RescueError;
use ark_std::format;
use serde::{Deserialize, Serialize};

/// The S-box exponent, a.k.a. alpha.
pub const ALPHA: u64 = 5;

/// Default state width `m`.
pub const STATE_WIDTH: usize = 12;
/// Default capacity, in field elements.
pub const CAPACITY: usize = 4;
/// Default number of full rounds `N`.
// Each full round is two half-rounds (forward and inverse S-box), so the
// permutation applies 2 * ROUNDS S-box layers.
pub const ROUNDS: usize = 7;
/// Default digest size, in field elements.
pub const DIGEST_SIZE: usize = 4;
/// Default security level in bits. Only feeds the round-constant seed.
pub const SECURITY_LEVEL: usize = 128;

/// Shape of a Rescue-Prime instance: state width, capacity, number of rounds
/// and digest size, all counted in field elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RescueConfig {
    /// `m`, number of field elements in the permutation state.
    pub state_width: usize,
    /// Number of state elements hidden from absorb/squeeze.
    pub capacity: usize,
    /// Number of full (double) rounds of the permutation.
    pub rounds: usize,
    /// Number of field elements returned by the hash.
    pub digest_size: usize,
    /// Security level in bits, part of the round-constant seed.
    #[serde(default = "default_security_level")]
    pub security_level: usize,
}

fn default_security_level() -> usize {
    SECURITY_LEVEL
}

impl Default for RescueConfig {
    fn default() -> Self {
        Self {
            state_width: STATE_WIDTH,
            capacity: CAPACITY,
            rounds: ROUNDS,
            digest_size: DIGEST_SIZE,
            security_level: SECURITY_LEVEL,
        }
    }
}

impl RescueConfig {
    /// A config with the default security level.
    pub fn new(state_width: usize, capacity: usize, rounds: usize, digest_size: usize) -> Self {
        Self {
            state_width,
            capacity,
            rounds,
            digest_size,
            security_level: SECURITY_LEVEL,
        }
    }

    /// Number of elements absorbed or squeezed per permutation call.
    pub fn rate(&self) -> usize {
        self.state_width.saturating_sub(self.capacity)
    }

    /// Check the shape is usable: `1 <= capacity < state_width`,
    /// `rounds >= 1` and `1 <= digest_size <= rate`.
    pub fn validate(&self) -> Result<(), RescueError> {
        if self.capacity == 0 {
            return Err(RescueError::ConfigurationError(
                "capacity must be at least 1".into(),
            ));
        }
        if self.capacity >= self.state_width {
            return Err(RescueError::ConfigurationError(format!(
                "capacity {} must be smaller than state width {}",
                self.capacity, self.state_width
            )));
        }
        if self.rounds == 0 {
            return Err(RescueError::ConfigurationError(
                "at least one round is required".into(),
            ));
        }
        if self.digest_size == 0 || self.digest_size > self.rate() {
            return Err(RescueError::ConfigurationError(format!(
                "digest size {} must be between 1 and the rate {}",
                self.digest_size,
                self.rate()
            )));
        }
        Ok(())
    }
}
