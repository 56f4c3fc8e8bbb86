//! Token builder: one issuance context owning a user identity and its tenant grants.

pub mod issue;
pub mod options;

pub use issue::*;
pub use options::*;

// crates.io
use jsonwebtoken::Algorithm;
// self
use crate::{
	_prelude::*,
	auth::{TenantGrant, TenantMap, TenantState, UserIdentity, UserProfile},
	ext::Clock,
	key::SigningKey,
	obs::{IssueOutcome, IssueSpan, record_issue_outcome},
	signer::{Claims, SignOptions, Signer, SignerError},
};

/// Algorithm used when none is configured.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS256;
/// Issuer stamped when none is configured.
pub const DEFAULT_ISSUER: &str = "tenant-token";
/// `typ` claim used when none is configured.
pub const DEFAULT_TOKEN_TYPE: &str = "access";
/// Lifetime applied when an issuance specifies no expiry.
pub const DEFAULT_EXPIRES_IN: &str = "15m";
/// Claim name carrying the master key, present only when one was configured.
pub const MASTER_KEY_CLAIM: &str = "masterKey";
/// Advisory emitted when raw byte key material is paired with the default algorithm.
pub const RAW_KEY_ADVISORY: &str = "Signing with raw key bytes and the default HS256 algorithm; \
	consider an asymmetric algorithm (RS256, ES256, or EdDSA) with a structured key.";

/// Builds signed tokens for one user and a mutable set of tenant grants.
///
/// The identity is resolved once at construction. Tenant operations act on the current set only
/// and return `&mut Self` so calls can be chained; [`reset`](Self::reset) restores the set captured
/// at construction. Instances are not internally synchronized: share one across threads only
/// behind external locking.
pub struct TokenBuilder {
	user: UserIdentity,
	state: TenantState,
	key: SigningKey,
	algorithm: Algorithm,
	issuer: String,
	token_type: String,
	master_key: Option<String>,
	signer: Arc<dyn Signer>,
	clock: Arc<dyn Clock>,
}
impl TokenBuilder {
	/// Creates a builder with every optional input defaulted.
	pub fn new(profile: UserProfile, key: impl Into<SigningKey>) -> Self {
		Self::options(profile, key).build()
	}

	/// Returns construction options for the profile and key.
	pub fn options(profile: UserProfile, key: impl Into<SigningKey>) -> TokenBuilderOptions {
		TokenBuilderOptions::new(profile, key.into())
	}

	/// Resolved user identity.
	pub fn user(&self) -> &UserIdentity {
		&self.user
	}

	/// Current tenant set.
	pub fn tenants(&self) -> &TenantMap {
		self.state.current()
	}

	/// Tenant set captured at construction.
	pub fn base_tenants(&self) -> &TenantMap {
		self.state.base()
	}

	/// Both tenant sets.
	pub fn tenant_state(&self) -> &TenantState {
		&self.state
	}

	/// Signing algorithm.
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// Issuer stamped into every token.
	pub fn issuer(&self) -> &str {
		&self.issuer
	}

	/// `typ` claim value.
	pub fn token_type(&self) -> &str {
		&self.token_type
	}

	/// Returns `true` if issued tokens carry the master-key claim.
	pub fn has_master_key(&self) -> bool {
		self.master_key.is_some()
	}

	/// Inserts or fully replaces the grant for its tenant in the current set.
	pub fn add_tenant(&mut self, grant: TenantGrant) -> &mut Self {
		self.state.add(grant);

		self
	}

	/// Removes the tenant from the current set; unknown tenants are ignored.
	pub fn remove_tenant(&mut self, tenant_id: &str) -> &mut Self {
		self.state.remove(tenant_id);

		self
	}

	/// Restores the current set from the construction-time snapshot.
	pub fn reset(&mut self) -> &mut Self {
		self.state.reset();

		self
	}

	/// Assembles the payload the next [`get_token`](Self::get_token) call would sign.
	///
	/// The master-key claim is inserted only when configured; it is never present as `null`.
	pub fn claims(&self) -> Result<Claims, SignerError> {
		let mut claims = Claims::new();

		claims.insert("typ".into(), Value::String(self.token_type.clone()));
		claims.insert("user".into(), to_claim(&self.user)?);
		claims.insert("tenants".into(), to_claim(self.state.current())?);

		if let Some(master_key) = &self.master_key {
			claims.insert(MASTER_KEY_CLAIM.into(), Value::String(master_key.clone()));
		}

		Ok(claims)
	}

	/// Signs the current user and tenant state.
	///
	/// Signer failures are returned unmodified and never retried.
	pub fn get_token(&self, options: IssueOptions) -> Result<String> {
		let algorithm = format!("{:?}", self.algorithm);
		let _guard = IssueSpan::new("get_token", &self.token_type, &algorithm).entered();

		record_issue_outcome(IssueOutcome::Attempt);

		let result = self.sign(&options);

		record_issue_outcome(match result {
			Ok(_) => IssueOutcome::Success,
			Err(_) => IssueOutcome::Failure,
		});

		result.map_err(Error::from)
	}

	fn sign(&self, options: &IssueOptions) -> Result<String, SignerError> {
		let claims = self.claims()?;
		let sign_options = SignOptions {
			issuer: self.issuer.clone(),
			algorithm: self.algorithm,
			expires_in: options.resolve(self.clock.now()),
		};

		self.signer.sign(&claims, &self.key, &sign_options)
	}
}
impl Debug for TokenBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenBuilder")
			.field("user", &self.user)
			.field("state", &self.state)
			.field("key", &self.key)
			.field("algorithm", &self.algorithm)
			.field("issuer", &self.issuer)
			.field("token_type", &self.token_type)
			.field("master_key_set", &self.master_key.is_some())
			.finish()
	}
}

fn to_claim<T>(value: &T) -> Result<Value, SignerError>
where
	T: ?Sized + Serialize,
{
	serde_json::to_value(value).map_err(|e| SignerError::Encode { source: e.into() })
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::{auth::TenantRecord, ext::FixedClock, obs::MemoryAdvisory};

	fn fixed_clock() -> Arc<FixedClock> {
		Arc::new(FixedClock::new(macros::datetime!(2025-01-01 00:00 UTC)))
	}

	fn grant(id: &str, role: &str, permissions: &[&str]) -> TenantGrant {
		TenantGrant::new(id, role, permissions.iter().copied())
	}

	#[test]
	fn defaults_are_applied_once() {
		let clock = fixed_clock();
		let builder = TokenBuilder::options(UserProfile::new("a@b.com"), "secret")
			.clock(clock.clone())
			.build();

		clock.advance(Duration::hours(1));

		assert_eq!(builder.algorithm(), Algorithm::HS256);
		assert_eq!(builder.issuer(), DEFAULT_ISSUER);
		assert_eq!(builder.token_type(), DEFAULT_TOKEN_TYPE);
		assert_eq!(builder.user().created_at(), "2025-01-01T00:00:00.000Z");
		assert!(!builder.has_master_key());
		assert!(builder.tenants().is_empty());
		assert!(builder.base_tenants().is_empty());
	}

	#[test]
	fn mutators_return_the_same_instance() {
		let mut builder = TokenBuilder::new(UserProfile::new("a@b.com"), "secret");
		let address: *const TokenBuilder = &builder;

		assert!(std::ptr::eq(builder.add_tenant(grant("t1", "admin", &["*"])), address));
		assert!(std::ptr::eq(builder.remove_tenant("t1"), address));
		assert!(std::ptr::eq(builder.reset(), address));
	}

	#[test]
	fn claims_snapshot_current_tenants() {
		let mut builder = TokenBuilder::options(UserProfile::new("a@b.com").id("u-1"), "secret")
			.tenant(grant("t1", "admin", &["*"]))
			.token_type("refresh")
			.build();

		builder.add_tenant(grant("t2", "member", &["read"]));

		let claims = builder.claims().expect("Claims should assemble.");

		assert_eq!(claims["typ"], "refresh");
		assert_eq!(claims["user"]["id"], "u-1");
		assert_eq!(claims["tenants"]["t2"]["role"], "member");

		builder.remove_tenant("t2");

		assert_eq!(claims["tenants"]["t2"]["permissions"][0], "read");
		assert_eq!(builder.tenants().get("t1"), Some(&TenantRecord::new("admin", ["*"])));
	}

	#[test]
	fn master_key_claim_is_absent_unless_configured() {
		let without = TokenBuilder::new(UserProfile::new("a@b.com"), "secret")
			.claims()
			.expect("Claims should assemble.");
		let empty = TokenBuilder::options(UserProfile::new("a@b.com"), "secret")
			.master_key("")
			.build()
			.claims()
			.expect("Claims should assemble.");
		let with = TokenBuilder::options(UserProfile::new("a@b.com"), "secret")
			.master_key("mk-1")
			.build()
			.claims()
			.expect("Claims should assemble.");

		assert!(!without.contains_key(MASTER_KEY_CLAIM));
		assert!(!empty.contains_key(MASTER_KEY_CLAIM));
		assert_eq!(with[MASTER_KEY_CLAIM], "mk-1");
	}

	#[test]
	fn raw_bytes_with_default_algorithm_warn_once() {
		let sink = Arc::new(MemoryAdvisory::default());
		let _builder = TokenBuilder::options(UserProfile::new("a@b.com"), b"raw".to_vec())
			.advisory(sink.clone())
			.build();

		assert_eq!(sink.messages(), [RAW_KEY_ADVISORY]);
	}

	#[test]
	fn other_key_shapes_do_not_warn() {
		let sink = Arc::new(MemoryAdvisory::default());

		TokenBuilder::options(UserProfile::new("a@b.com"), "string-secret")
			.advisory(sink.clone())
			.build();
		TokenBuilder::options(UserProfile::new("a@b.com"), b"raw".to_vec())
			.algorithm(Algorithm::HS512)
			.advisory(sink.clone())
			.build();
		TokenBuilder::options(UserProfile::new("a@b.com"), SigningKey::ed_pem("pem"))
			.algorithm(Algorithm::EdDSA)
			.advisory(sink.clone())
			.build();

		assert!(sink.is_empty());
	}

	#[test]
	fn debug_redacts_secrets() {
		let builder = TokenBuilder::options(UserProfile::new("a@b.com"), "top-secret")
			.master_key("mk-secret")
			.build();
		let rendered = format!("{builder:?}");

		assert!(!rendered.contains("top-secret"));
		assert!(!rendered.contains("mk-secret"));
		assert!(rendered.contains("master_key_set: true"));
	}
}
