//! Signing key material accepted by signers, with redacting formatters.
//!
//! Keys are stored verbatim; parsing happens only when a signer resolves the key against an
//! algorithm, so malformed material surfaces as a signing failure instead of a construction one.

// crates.io
use jsonwebtoken::Algorithm;
// self
use crate::_prelude::*;

/// Asymmetric key families understood by the default signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyFamily {
	/// RSA keys, used by `RS*` and `PS*`.
	Rsa,
	/// Elliptic-curve keys, used by `ES*`.
	Ec,
	/// Ed25519 keys, used by `EdDSA`.
	Ed,
}
impl KeyFamily {
	/// Returns the family an asymmetric algorithm requires, or `None` for HMAC algorithms.
	pub const fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
		match algorithm {
			Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => None,
			Algorithm::RS256
			| Algorithm::RS384
			| Algorithm::RS512
			| Algorithm::PS256
			| Algorithm::PS384
			| Algorithm::PS512 => Some(Self::Rsa),
			Algorithm::ES256 | Algorithm::ES384 => Some(Self::Ec),
			Algorithm::EdDSA => Some(Self::Ed),
		}
	}

	/// Returns a stable label suitable for errors and span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Rsa => "rsa",
			Self::Ec => "ec",
			Self::Ed => "ed25519",
		}
	}
}
impl Display for KeyFamily {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structured asymmetric key: PEM text tagged with its family.
///
/// Signers expect a private key when signing and a public key when verifying.
#[derive(Clone, PartialEq, Eq)]
pub struct AsymmetricKey {
	family: KeyFamily,
	pem: String,
}
impl AsymmetricKey {
	/// Wraps PEM text for the provided family.
	pub fn new(family: KeyFamily, pem: impl Into<String>) -> Self {
		Self { family, pem: pem.into() }
	}

	/// Key family.
	pub fn family(&self) -> KeyFamily {
		self.family
	}

	/// Returns the PEM text. Callers must avoid logging private keys.
	pub fn expose_pem(&self) -> &str {
		&self.pem
	}
}
impl Debug for AsymmetricKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AsymmetricKey")
			.field("family", &self.family)
			.field("pem", &"<redacted>")
			.finish()
	}
}

/// Key material handed to a [`Signer`](crate::signer::Signer).
#[derive(Clone, PartialEq, Eq)]
pub enum SigningKey {
	/// String key: an HMAC secret, or PEM text when paired with an asymmetric algorithm.
	Secret(String),
	/// Raw binary key material: an HMAC secret, or PEM bytes for asymmetric algorithms.
	Bytes(Vec<u8>),
	/// Structured asymmetric key.
	Asymmetric(AsymmetricKey),
}
impl SigningKey {
	/// String secret.
	pub fn secret(value: impl Into<String>) -> Self {
		Self::Secret(value.into())
	}

	/// Raw binary key material.
	pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
		Self::Bytes(value.into())
	}

	/// PEM-encoded RSA key.
	pub fn rsa_pem(pem: impl Into<String>) -> Self {
		Self::Asymmetric(AsymmetricKey::new(KeyFamily::Rsa, pem))
	}

	/// PEM-encoded elliptic-curve key.
	pub fn ec_pem(pem: impl Into<String>) -> Self {
		Self::Asymmetric(AsymmetricKey::new(KeyFamily::Ec, pem))
	}

	/// PEM-encoded Ed25519 key.
	pub fn ed_pem(pem: impl Into<String>) -> Self {
		Self::Asymmetric(AsymmetricKey::new(KeyFamily::Ed, pem))
	}

	/// Returns `true` for raw binary key material.
	///
	/// Only [`SigningKey::Bytes`] counts; a string secret is symmetric too but is not reported.
	pub fn is_raw_bytes(&self) -> bool {
		matches!(self, Self::Bytes(_))
	}

	/// Returns a stable label describing the key shape.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Secret(_) => "secret",
			Self::Bytes(_) => "bytes",
			Self::Asymmetric(key) => key.family.as_str(),
		}
	}

	/// Returns the raw key bytes. Callers must avoid logging them.
	pub fn expose_bytes(&self) -> &[u8] {
		match self {
			Self::Secret(value) => value.as_bytes(),
			Self::Bytes(value) => value,
			Self::Asymmetric(key) => key.pem.as_bytes(),
		}
	}
}
impl From<String> for SigningKey {
	fn from(value: String) -> Self {
		Self::Secret(value)
	}
}
impl From<&str> for SigningKey {
	fn from(value: &str) -> Self {
		Self::Secret(value.to_owned())
	}
}
impl From<Vec<u8>> for SigningKey {
	fn from(value: Vec<u8>) -> Self {
		Self::Bytes(value)
	}
}
impl From<AsymmetricKey> for SigningKey {
	fn from(value: AsymmetricKey) -> Self {
		Self::Asymmetric(value)
	}
}
impl Debug for SigningKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Secret(_) => f.debug_tuple("SigningKey::Secret").field(&"<redacted>").finish(),
			Self::Bytes(value) => f
				.debug_struct("SigningKey::Bytes")
				.field("len", &value.len())
				.field("value", &"<redacted>")
				.finish(),
			Self::Asymmetric(key) => f.debug_tuple("SigningKey::Asymmetric").field(key).finish(),
		}
	}
}
