//! Errors reported by construction, decoding and traversal.

use thiserror::Error;

/// The error type for fallible vector operations.
///
/// Every variant records `who`, the operation that rejected its input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An argument had the wrong shape for the operation.
    #[error("{who}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        who: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A string did not match any recognized encoded form.
    #[error("{who}: could not decode: {reason}")]
    Format {
        /// The operation that rejected the string.
        who: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// Shorthand for results carrying this crate’s [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for `Error::Format`.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    /// True for `Error::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

pub fn invalid_argument<A>(who: &'static str, reason: impl Into<String>) -> Result<A> {
    Err(Error::InvalidArgument {
        who,
        reason: reason.into(),
    })
}

pub fn bad_format<A>(who: &'static str, reason: impl Into<String>) -> Result<A> {
    Err(Error::Format {
        who,
        reason: reason.into(),
    })
}
