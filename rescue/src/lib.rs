// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

#![deny(missing_docs)]
//! This module implements the Rescue-Prime hash function
//! (<https://eprint.iacr.org/2020/1143.pdf>), a sponge over the Rescue-XLIX
//! permutation, for a prime field chosen at runtime.
//!
//! The default instance works over `p = 1 + 407 * 2^119` with state width 12,
//! capacity 4, 7 rounds and a 4-element digest:
//!
//! ```
//! use jf_rescue_prime::RescueHasher;
//!
//! let mut hasher = RescueHasher::new_from_str(
//!     "270497897142230380135924736767050121217",
//!     "2",
//!     4,  // capacity
//!     12, // state width
//!     7,  // rounds
//!     4,  // digest size
//! )?;
//! hasher.update("1")?;
//! let digest = hasher.finish()?;
//! assert_eq!(digest.split(' ').count(), 4);
//! # Ok::<(), jf_rescue_prime::errors::RescueError>(())
//! ```
#![deny(warnings)]
pub mod crhf;
pub mod errors;
mod field;
mod param;
mod permutation;
mod rescue_constants;
mod sponge;
mod structs;

pub use crhf::RescueCRHF;
pub use errors::RescueError;
pub use field::{FieldElement, PrimeField, DEFAULT_MODULUS, DEFAULT_PRIMITIVE_ELEMENT};
pub use param::{
    RescueConfig, ALPHA, CAPACITY, DIGEST_SIZE, ROUNDS, SECURITY_LEVEL, STATE_WIDTH,
};
pub use permutation::Permutation;
pub use sponge::{RescueHasher, SpongePhase};
pub use structs::*;
