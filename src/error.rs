//! Crate-level error type returned by token issuance.

// self
use crate::{_prelude::*, signer::SignerError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Signing failed; the signer's error is surfaced unmodified.
	#[error(transparent)]
	Signer(#[from] SignerError),
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn signer_errors_pass_through_unmodified() {
		let signer_error = SignerError::InvalidTimespan { expression: "soon".into() };
		let expected = signer_error.to_string();
		let error: Error = signer_error.into();

		assert!(matches!(error, Error::Signer(SignerError::InvalidTimespan { .. })));
		assert_eq!(error.to_string(), expected);
		assert!(StdError::source(&error).is_none());
	}

	#[test]
	fn key_errors_keep_their_source() {
		let source = jsonwebtoken::errors::ErrorKind::InvalidRsaKey("not a key".into()).into();
		let error: Error = SignerError::InvalidKey { source }.into();

		assert_eq!(error.to_string(), "Key material is invalid for the requested algorithm.");
		assert!(StdError::source(&error).is_some());
	}
}
