//! Tenant-scoped role and permission grants.

// self
use crate::{_prelude::*, auth::id::TenantId};

/// Tenant claim map keyed by tenant identifier.
pub type TenantMap = BTreeMap<TenantId, TenantRecord>;

/// Compact per-tenant record stored under the tenant's identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
	/// Role held within the tenant.
	pub role: String,
	/// Permissions granted within the tenant, in caller order.
	pub permissions: Vec<String>,
}
impl TenantRecord {
	/// Creates a record for the provided role and permissions.
	pub fn new<I, S>(role: impl Into<String>, permissions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { role: role.into(), permissions: permissions.into_iter().map(Into::into).collect() }
	}
}

/// A role plus permissions associated with one tenant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantGrant {
	/// Tenant the grant applies to.
	pub tenant_id: TenantId,
	/// Role held within the tenant.
	pub role: String,
	/// Permissions granted within the tenant.
	pub permissions: Vec<String>,
}
impl TenantGrant {
	/// Creates a grant for the tenant, role, and permissions.
	pub fn new<I, S>(
		tenant_id: impl Into<TenantId>,
		role: impl Into<String>,
		permissions: I,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let TenantRecord { role, permissions } = TenantRecord::new(role, permissions);

		Self { tenant_id: tenant_id.into(), role, permissions }
	}

	/// Creates a grant from an identifier and record.
	pub fn from_record(tenant_id: TenantId, record: TenantRecord) -> Self {
		Self { tenant_id, role: record.role, permissions: record.permissions }
	}

	/// Splits the grant into its map key and record.
	pub fn into_entry(self) -> (TenantId, TenantRecord) {
		(self.tenant_id, TenantRecord { role: self.role, permissions: self.permissions })
	}
}
impl From<(TenantId, TenantRecord)> for TenantGrant {
	fn from((tenant_id, record): (TenantId, TenantRecord)) -> Self {
		Self::from_record(tenant_id, record)
	}
}
