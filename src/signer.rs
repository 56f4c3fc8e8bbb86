//! Signing contract consumed by the token builder, plus the default JWT implementation.
//!
//! The builder never signs on its own: it assembles [`Claims`] and delegates to a [`Signer`],
//! which owns the standard `iat`, `iss`, and `exp` claims and the wire format.

pub mod jwt;
pub mod timespan;

pub use jwt::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::Algorithm;
// self
use crate::{_prelude::*, key::SigningKey};

/// Keyed claim map handed to signers and returned by verification.
pub type Claims = Map<String, Value>;

/// Signing and verification capability.
///
/// Implementors are required to be `Send + Sync` so one signer can back many builders.
pub trait Signer
where
	Self: Send + Sync,
{
	/// Stamps the standard claims onto `claims` and returns the compact signed token.
	fn sign(
		&self,
		claims: &Claims,
		key: &SigningKey,
		options: &SignOptions,
	) -> Result<String, SignerError>;

	/// Verifies the token's signature, expiry, and issuer, returning its claims.
	fn verify(
		&self,
		token: &str,
		key: &SigningKey,
		options: &VerifyOptions,
	) -> Result<Claims, SignerError>;
}

/// Errors raised by [`Signer`] implementations.
#[derive(Debug, ThisError)]
pub enum SignerError {
	/// No key material was supplied.
	#[error("Signing key must not be empty.")]
	EmptyKey,
	/// Key material could not be parsed for the requested algorithm.
	#[error("Key material is invalid for the requested algorithm.")]
	InvalidKey {
		/// Underlying key parsing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// A structured key was paired with an algorithm from another family.
	#[error("Algorithm {algorithm:?} cannot be used with a {key} key.")]
	KeyAlgorithmMismatch {
		/// Requested algorithm.
		algorithm: Algorithm,
		/// Label of the supplied key.
		key: &'static str,
	},
	/// Relative expiry expression could not be parsed.
	#[error("Expiry `{expression}` is not a number of seconds or a timespan expression.")]
	InvalidTimespan {
		/// Offending expression.
		expression: String,
	},
	/// Claims could not be serialized or signed.
	#[error("Token could not be encoded.")]
	Encode {
		/// Underlying encoding failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// Token is past its expiry.
	#[error("Token has expired.")]
	Expired,
	/// Signature, issuer, or claim validation failed.
	#[error("Token failed verification.")]
	Verification {
		/// Underlying validation failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// Token is not a well-formed compact JWT.
	#[error("Token is malformed: {reason}.")]
	MalformedToken {
		/// Human-readable reason.
		reason: String,
	},
}

/// Relative lifetime requested for a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpiresIn {
	/// Whole seconds after the issued-at instant; may be negative.
	Seconds(i64),
	/// Timespan expression such as `"15m"` or `"2 days"`, parsed by the signer.
	Expression(String),
}
impl ExpiresIn {
	/// Computes the `exp` claim for a token issued at `iat` (Unix seconds).
	pub fn expiry_from(&self, iat: i64) -> Result<i64, SignerError> {
		match self {
			Self::Seconds(seconds) => Ok(iat.saturating_add(*seconds)),
			Self::Expression(expression) => {
				let millis = timespan::parse_millis(expression).ok_or_else(|| {
					SignerError::InvalidTimespan { expression: expression.clone() }
				})?;

				Ok((iat as f64 + millis / 1_000.).floor() as i64)
			},
		}
	}
}
impl From<i64> for ExpiresIn {
	fn from(value: i64) -> Self {
		Self::Seconds(value)
	}
}
impl From<&str> for ExpiresIn {
	fn from(value: &str) -> Self {
		Self::Expression(value.to_owned())
	}
}
impl From<String> for ExpiresIn {
	fn from(value: String) -> Self {
		Self::Expression(value)
	}
}

/// Options passed to [`Signer::sign`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignOptions {
	/// Value stamped into the `iss` claim.
	pub issuer: String,
	/// Signing algorithm.
	pub algorithm: Algorithm,
	/// Lifetime used to derive the `exp` claim.
	pub expires_in: ExpiresIn,
}

/// Options passed to [`Signer::verify`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyOptions {
	/// Required `iss` value, when set.
	pub issuer: Option<String>,
	/// Algorithm the token must be signed with.
	pub algorithm: Algorithm,
	/// Clock skew tolerance in seconds; the signer's default applies when unset.
	pub leeway: Option<u64>,
}
impl VerifyOptions {
	/// Creates options accepting any issuer for the provided algorithm.
	pub fn new(algorithm: Algorithm) -> Self {
		Self { issuer: None, algorithm, leeway: None }
	}

	/// Requires the provided issuer.
	pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
		self.issuer = Some(issuer.into());

		self
	}

	/// Overrides the clock skew tolerance.
	pub fn leeway(mut self, seconds: u64) -> Self {
		self.leeway = Some(seconds);

		self
	}
}

/// Decodes the payload of a compact JWT without checking its signature.
///
/// Intended for inspection only; never trust the result for authorization.
pub fn decode_unverified(token: &str) -> Result<Claims, SignerError> {
	let mut segments = token.split('.');
	let (Some(_header), Some(payload), Some(_signature), None) =
		(segments.next(), segments.next(), segments.next(), segments.next())
	else {
		return Err(SignerError::MalformedToken { reason: "expected three segments".into() });
	};
	let bytes = URL_SAFE_NO_PAD
		.decode(payload)
		.map_err(|e| SignerError::MalformedToken { reason: e.to_string() })?;

	serde_json::from_slice(&bytes)
		.map_err(|e| SignerError::MalformedToken { reason: e.to_string() })
}
