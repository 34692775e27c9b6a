// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Derivation of the Rescue-XLIX round constants and MDS matrix, following
//! the reference procedures of <https://eprint.iacr.org/2020/1143.pdf>.

mod mds;
mod round_constants;

pub(crate) use mds::mds_matrix;
pub(crate) use round_constants::round_constants;
