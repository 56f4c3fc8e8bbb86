//! Default [`Signer`] backed by `jsonwebtoken`.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
// self
use crate::{
	_prelude::*,
	ext::{Clock, SystemClock},
	key::{KeyFamily, SigningKey},
	signer::{Claims, SignOptions, Signer, SignerError, VerifyOptions},
};

/// Compact JWS signer stamping `iat`, `iss`, and `exp` from its clock.
///
/// String and byte keys are HMAC secrets for `HS*` algorithms and PEM text for asymmetric ones.
/// Structured keys must belong to the algorithm's family.
#[derive(Clone)]
pub struct JwtSigner {
	clock: Arc<dyn Clock>,
}
impl JwtSigner {
	/// Creates a signer reading the system clock.
	pub fn new() -> Self {
		Self::with_clock(Arc::new(SystemClock))
	}

	/// Creates a signer reading the provided clock.
	pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
		Self { clock }
	}
}
impl Default for JwtSigner {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for JwtSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("JwtSigner(..)")
	}
}
impl Signer for JwtSigner {
	fn sign(
		&self,
		claims: &Claims,
		key: &SigningKey,
		options: &SignOptions,
	) -> Result<String, SignerError> {
		let encoding_key = encoding_key(key, options.algorithm)?;
		let iat = self.clock.now().unix_timestamp();
		let exp = options.expires_in.expiry_from(iat)?;
		let mut payload = claims.clone();

		payload.insert("iat".into(), iat.into());
		payload.insert("exp".into(), exp.into());
		payload.insert("iss".into(), options.issuer.clone().into());

		jsonwebtoken::encode(&Header::new(options.algorithm), &payload, &encoding_key)
			.map_err(|source| SignerError::Encode { source })
	}

	fn verify(
		&self,
		token: &str,
		key: &SigningKey,
		options: &VerifyOptions,
	) -> Result<Claims, SignerError> {
		let decoding_key = decoding_key(key, options.algorithm)?;
		let mut validation = Validation::new(options.algorithm);

		validation.set_required_spec_claims(&["exp", "iss"]);

		if let Some(issuer) = &options.issuer {
			validation.set_issuer(&[issuer]);
		}
		if let Some(leeway) = options.leeway {
			validation.leeway = leeway;
		}

		jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
			.map(|data| data.claims)
			.map_err(|e| match e.kind() {
				ErrorKind::ExpiredSignature => SignerError::Expired,
				_ => SignerError::Verification { source: e },
			})
	}
}

/// Returns the family the key must be parsed as, or `None` for HMAC secrets.
fn resolve_family(
	key: &SigningKey,
	algorithm: Algorithm,
) -> Result<Option<KeyFamily>, SignerError> {
	if key.expose_bytes().is_empty() {
		return Err(SignerError::EmptyKey);
	}

	let expected = KeyFamily::for_algorithm(algorithm);

	match (key, expected) {
		(SigningKey::Asymmetric(asymmetric), Some(family)) if asymmetric.family() == family =>
			Ok(expected),
		(SigningKey::Asymmetric(_), _) =>
			Err(SignerError::KeyAlgorithmMismatch { algorithm, key: key.kind() }),
		_ => Ok(expected),
	}
}

fn encoding_key(key: &SigningKey, algorithm: Algorithm) -> Result<EncodingKey, SignerError> {
	let material = key.expose_bytes();
	let parsed = match resolve_family(key, algorithm)? {
		None => return Ok(EncodingKey::from_secret(material)),
		Some(KeyFamily::Rsa) => EncodingKey::from_rsa_pem(material),
		Some(KeyFamily::Ec) => EncodingKey::from_ec_pem(material),
		Some(KeyFamily::Ed) => EncodingKey::from_ed_pem(material),
	};

	parsed.map_err(|source| SignerError::InvalidKey { source })
}

fn decoding_key(key: &SigningKey, algorithm: Algorithm) -> Result<DecodingKey, SignerError> {
	let material = key.expose_bytes();
	let parsed = match resolve_family(key, algorithm)? {
		None => return Ok(DecodingKey::from_secret(material)),
		Some(KeyFamily::Rsa) => DecodingKey::from_rsa_pem(material),
		Some(KeyFamily::Ec) => DecodingKey::from_ec_pem(material),
		Some(KeyFamily::Ed) => DecodingKey::from_ed_pem(material),
	};

	parsed.map_err(|source| SignerError::InvalidKey { source })
}
