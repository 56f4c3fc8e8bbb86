//! User identity carried in every issued token and the profile it is resolved from.

// crates.io
use time::{UtcOffset, macros::format_description};
// self
use crate::{_prelude::*, ext::IdGenerator};

/// Account classification applied when the profile does not provide one.
pub const DEFAULT_ACCOUNT_TYPE: &str = "User";

/// Construction input for a [`UserIdentity`].
///
/// Only `email` is mandatory. Every other field is optional and resolved exactly once when the
/// owning [`TokenBuilder`](crate::builder::TokenBuilder) is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	/// Stable user identifier; generated when absent.
	pub id: Option<String>,
	/// Email address.
	pub email: String,
	/// Given name.
	pub first_name: Option<String>,
	/// Family name.
	pub last_name: Option<String>,
	/// Creation timestamp; the construction instant is used when absent.
	pub created_at: Option<String>,
	/// Verification flag; defaults to `true`.
	pub verified: Option<bool>,
	/// Free-form account classification; defaults to [`DEFAULT_ACCOUNT_TYPE`].
	pub account_type: Option<String>,
	/// Avatar or profile image URL.
	pub image_url: Option<String>,
	/// Global permissions; defaults to an empty list.
	pub permissions: Option<Vec<String>>,
}
impl UserProfile {
	/// Creates a profile carrying only the mandatory email.
	pub fn new(email: impl Into<String>) -> Self {
		Self { email: email.into(), ..Default::default() }
	}

	/// Sets the user identifier.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());

		self
	}

	/// Sets the given name.
	pub fn first_name(mut self, name: impl Into<String>) -> Self {
		self.first_name = Some(name.into());

		self
	}

	/// Sets the family name.
	pub fn last_name(mut self, name: impl Into<String>) -> Self {
		self.last_name = Some(name.into());

		self
	}

	/// Sets the creation timestamp string verbatim.
	pub fn created_at(mut self, timestamp: impl Into<String>) -> Self {
		self.created_at = Some(timestamp.into());

		self
	}

	/// Sets the verification flag.
	pub fn verified(mut self, verified: bool) -> Self {
		self.verified = Some(verified);

		self
	}

	/// Sets the account classification.
	pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
		self.account_type = Some(account_type.into());

		self
	}

	/// Sets the profile image URL.
	pub fn image_url(mut self, url: impl Into<String>) -> Self {
		self.image_url = Some(url.into());

		self
	}

	/// Sets the global permission list.
	pub fn permissions<I, S>(mut self, permissions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.permissions = Some(permissions.into_iter().map(Into::into).collect());

		self
	}

	/// Applies every default and produces the immutable identity.
	pub(crate) fn resolve(self, now: OffsetDateTime, ids: &dyn IdGenerator) -> UserIdentity {
		UserIdentity {
			id: self.id.unwrap_or_else(|| ids.generate()),
			email: self.email,
			first_name: self.first_name,
			last_name: self.last_name,
			created_at: self.created_at.unwrap_or_else(|| format_created_at(now)),
			verified: self.verified.unwrap_or(true),
			account_type: self.account_type.unwrap_or_else(|| DEFAULT_ACCOUNT_TYPE.to_owned()),
			image_url: self.image_url,
			permissions: self.permissions.unwrap_or_default(),
		}
	}
}

/// Fully defaulted user identity embedded under the `user` claim.
///
/// Fields are read-only once the identity has been resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
	id: String,
	email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	first_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	last_name: Option<String>,
	created_at: String,
	verified: bool,
	account_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	image_url: Option<String>,
	permissions: Vec<String>,
}
impl UserIdentity {
	/// User identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Email address.
	pub fn email(&self) -> &str {
		&self.email
	}

	/// Given name, if supplied.
	pub fn first_name(&self) -> Option<&str> {
		self.first_name.as_deref()
	}

	/// Family name, if supplied.
	pub fn last_name(&self) -> Option<&str> {
		self.last_name.as_deref()
	}

	/// Creation timestamp string.
	pub fn created_at(&self) -> &str {
		&self.created_at
	}

	/// Whether the account is verified.
	pub fn verified(&self) -> bool {
		self.verified
	}

	/// Account classification.
	pub fn account_type(&self) -> &str {
		&self.account_type
	}

	/// Profile image URL, if supplied.
	pub fn image_url(&self) -> Option<&str> {
		self.image_url.as_deref()
	}

	/// Global permissions, in caller order.
	pub fn permissions(&self) -> &[String] {
		&self.permissions
	}
}

// Millisecond precision with a literal `Z`, e.g. `2025-01-01T00:00:00.000Z`.
fn format_created_at(now: OffsetDateTime) -> String {
	let utc = now.to_offset(UtcOffset::UTC);

	// An `OffsetDateTime` carries every component and the target is a `String`, so this only
	// errs if `time` adds a new failure mode; the fallback renders the same shape by hand.
	utc.format(format_description!(
		"[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
	))
	.unwrap_or_else(|_| format_created_at_parts(utc))
}

fn format_created_at_parts(utc: OffsetDateTime) -> String {
	let year = utc.year();
	let sign = if year < 0 { "-" } else { "" };

	format!(
		"{sign}{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
		year.unsigned_abs(),
		u8::from(utc.month()),
		utc.day(),
		utc.hour(),
		utc.minute(),
		utc.second(),
		utc.millisecond(),
	)
}
