//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `SdError` as one variant
//! via `#[from]`, so configuration problems found here surface unchanged.

use thiserror::Error;

/// The error type for `sd-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sd-core`.
pub type SdResult<T> = Result<T, SdError>;
