//! Construction options resolved once into a [`TokenBuilder`].

// crates.io
use jsonwebtoken::Algorithm;
// self
use crate::{
	_prelude::*,
	auth::{TenantGrant, TenantState, UserProfile},
	builder::{
		DEFAULT_ALGORITHM, DEFAULT_ISSUER, DEFAULT_TOKEN_TYPE, RAW_KEY_ADVISORY, TokenBuilder,
	},
	ext::{Clock, IdGenerator, SystemClock, UuidGenerator},
	key::SigningKey,
	obs::{AdvisorySink, TracingAdvisory},
	signer::{JwtSigner, Signer},
};

/// Staging area for [`TokenBuilder`] construction.
///
/// Every optional input stays `None` until [`build`](Self::build) applies the defaults, so later
/// code never re-checks for missing values.
pub struct TokenBuilderOptions {
	profile: UserProfile,
	key: SigningKey,
	algorithm: Option<Algorithm>,
	tenants: Vec<TenantGrant>,
	issuer: Option<String>,
	token_type: Option<String>,
	master_key: Option<String>,
	signer: Option<Arc<dyn Signer>>,
	clock: Option<Arc<dyn Clock>>,
	id_generator: Option<Arc<dyn IdGenerator>>,
	advisory: Option<Arc<dyn AdvisorySink>>,
}
impl TokenBuilderOptions {
	pub(crate) fn new(profile: UserProfile, key: SigningKey) -> Self {
		Self {
			profile,
			key,
			algorithm: None,
			tenants: Vec::new(),
			issuer: None,
			token_type: None,
			master_key: None,
			signer: None,
			clock: None,
			id_generator: None,
			advisory: None,
		}
	}

	/// Overrides the signing algorithm (defaults to [`DEFAULT_ALGORITHM`]).
	pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
		self.algorithm = Some(algorithm);

		self
	}

	/// Replaces the initial tenant grants.
	pub fn tenants<I>(mut self, grants: I) -> Self
	where
		I: IntoIterator<Item = TenantGrant>,
	{
		self.tenants = grants.into_iter().collect();

		self
	}

	/// Appends one initial tenant grant.
	pub fn tenant(mut self, grant: TenantGrant) -> Self {
		self.tenants.push(grant);

		self
	}

	/// Overrides the `iss` claim (defaults to [`DEFAULT_ISSUER`]).
	pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
		self.issuer = Some(issuer.into());

		self
	}

	/// Overrides the `typ` claim (defaults to [`DEFAULT_TOKEN_TYPE`]).
	pub fn token_type(mut self, token_type: impl Into<String>) -> Self {
		self.token_type = Some(token_type.into());

		self
	}

	/// Sets the master-key claim; empty values are treated as absent.
	pub fn master_key(mut self, master_key: impl Into<String>) -> Self {
		self.master_key = Some(master_key.into());

		self
	}

	/// Overrides the signer (defaults to a [`JwtSigner`] sharing the builder's clock).
	pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
		self.signer = Some(signer);

		self
	}

	/// Overrides the clock (defaults to [`SystemClock`]).
	pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = Some(clock);

		self
	}

	/// Overrides the user id generator (defaults to [`UuidGenerator`]).
	pub fn id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
		self.id_generator = Some(id_generator);

		self
	}

	/// Overrides the advisory sink (defaults to [`TracingAdvisory`]).
	pub fn advisory(mut self, advisory: Arc<dyn AdvisorySink>) -> Self {
		self.advisory = Some(advisory);

		self
	}

	/// Applies every default and produces the builder.
	///
	/// Emits one advisory when raw byte key material is paired with the default algorithm.
	pub fn build(self) -> TokenBuilder {
		let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
		let id_generator = self.id_generator.unwrap_or_else(|| Arc::new(UuidGenerator));
		let advisory = self.advisory.unwrap_or_else(|| Arc::new(TracingAdvisory));
		let signer =
			self.signer.unwrap_or_else(|| Arc::new(JwtSigner::with_clock(clock.clone())));
		let algorithm = self.algorithm.unwrap_or(DEFAULT_ALGORITHM);

		if self.key.is_raw_bytes() && algorithm == DEFAULT_ALGORITHM {
			advisory.warn(RAW_KEY_ADVISORY);
		}

		TokenBuilder {
			user: self.profile.resolve(clock.now(), id_generator.as_ref()),
			state: TenantState::new(self.tenants),
			key: self.key,
			algorithm,
			issuer: self.issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_owned()),
			token_type: self.token_type.unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_owned()),
			master_key: self.master_key.filter(|value| !value.is_empty()),
			signer,
			clock,
		}
	}
}
impl Debug for TokenBuilderOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBuilderOptions")
			.field("profile", &self.profile)
			.field("key", &self.key)
			.field("algorithm", &self.algorithm)
			.field("tenants", &self.tenants)
			.field("issuer", &self.issuer)
			.field("token_type", &self.token_type)
			.field("master_key_set", &self.master_key.is_some())
			.finish()
	}
}
