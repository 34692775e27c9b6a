//! Error types.

// using `displaydoc` instead of `thiserror`, see
// https://github.com/dtolnay/thiserror/pull/64#issuecomment-735805334
// `thiserror` does not support #![no_std]

use ark_std::string::String;
use displaydoc::Display;

/// Various error modes.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RescueError {
    /// Invalid input, {0}
    InvalidInput(String),
    /// Bad parameter configuration, {0}
    ConfigurationError(String),
    /// Invalid field operation, {0}
    InvalidOperation(String),
    /// Hasher used in the wrong state, {0}
    InvalidState(String),
}

impl ark_std::error::Error for RescueError {}
