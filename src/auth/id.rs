//! Tenant identifiers used as claim keys.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Identifier for a tenant; the key of every tenant claim entry.
///
/// Any string is accepted, including empty or space-separated names, since the identifier is an
/// opaque map key.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);
impl TenantId {
	/// Wraps the provided string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for TenantId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for TenantId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for TenantId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<String> for TenantId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TenantId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<TenantId> for String {
	fn from(value: TenantId) -> Self {
		value.0
	}
}
impl Debug for TenantId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Tenant({})", self.0)
	}
}
impl Display for TenantId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
