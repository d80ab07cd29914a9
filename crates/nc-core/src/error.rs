//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `NcError` as one variant
//! via `#[from]`, so configuration problems surface unchanged at the driver.

use thiserror::Error;

/// The top-level error type for `nc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("particle arena is full at {0} slots")]
    SlotLimit(usize),
}

impl NcError {
    /// Shorthand for building a [`NcError::Config`] from anything printable.
    pub fn config(msg: impl Into<String>) -> Self {
        NcError::Config(msg.into())
    }
}

/// Shorthand result type for all `nc-*` crates.
pub type NcResult<T> = Result<T, NcError>;
