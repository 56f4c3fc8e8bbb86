//! Current and base tenant sets held by one issuance context.

// self
use crate::{
	_prelude::*,
	auth::{TenantGrant, TenantId, TenantMap, TenantRecord},
};

/// Two independent tenant maps: the live `current` set and the `base` restore point.
///
/// `base` is captured once from the initial grants and never changes afterwards. The maps own
/// their records, so mutating one can never be observed through the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TenantState {
	current: TenantMap,
	base: TenantMap,
}
impl TenantState {
	/// Builds both sets from the initial grants; later duplicates replace earlier ones.
	pub fn new<I>(grants: I) -> Self
	where
		I: IntoIterator<Item = TenantGrant>,
	{
		let current = grants.into_iter().map(TenantGrant::into_entry).collect::<TenantMap>();
		let base = current.clone();

		Self { current, base }
	}

	/// Live tenant set included in the next issued token.
	pub fn current(&self) -> &TenantMap {
		&self.current
	}

	/// Tenant set captured at construction.
	pub fn base(&self) -> &TenantMap {
		&self.base
	}

	/// Inserts the grant, fully replacing any record already stored for its tenant.
	pub fn add(&mut self, grant: TenantGrant) {
		let (id, record) = grant.into_entry();

		self.current.insert(id, record);
	}

	/// Removes the tenant from the current set; absent tenants are ignored.
	pub fn remove(&mut self, tenant_id: &str) {
		self.current.remove(tenant_id);
	}

	/// Replaces the current set with a fresh copy of the base set.
	pub fn reset(&mut self) {
		self.current = self.base.clone();
	}

	/// Returns `true` if the current set holds the tenant.
	pub fn contains(&self, tenant_id: &str) -> bool {
		self.current.contains_key(tenant_id)
	}

	/// Looks up the current record for the tenant.
	pub fn get(&self, tenant_id: &str) -> Option<&TenantRecord> {
		self.current.get(tenant_id)
	}

	/// Number of tenants in the current set.
	pub fn len(&self) -> usize {
		self.current.len()
	}

	/// Returns `true` if the current set is empty.
	pub fn is_empty(&self) -> bool {
		self.current.is_empty()
	}

	/// Iterates the current set in identifier order.
	pub fn iter(&self) -> impl Iterator<Item = (&TenantId, &TenantRecord)> {
		self.current.iter()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn grant(id: &str, role: &str, permissions: &[&str]) -> TenantGrant {
		TenantGrant::new(id, role, permissions.iter().copied())
	}

	#[test]
	fn empty_state_keeps_base_empty_after_mutation() {
		let mut state = TenantState::default();

		state.add(grant("t1", "admin", &["*"]));

		assert!(state.contains("t1"));
		assert!(state.base().is_empty());
	}

	#[test]
	fn initial_grants_seed_both_sets() {
		let state = TenantState::new([grant("t1", "admin", &["*"]), grant("t2", "member", &[])]);

		assert_eq!(state.current(), state.base());
		assert_eq!(state.len(), 2);
		assert_eq!(state.get("t2"), Some(&TenantRecord::new("member", Vec::<String>::new())));
	}

	#[test]
	fn add_overwrites_instead_of_merging() {
		let mut state = TenantState::new([grant("t1", "admin", &["*"])]);

		state.add(grant("t1", "viewer", &["read"]));

		assert_eq!(state.get("t1"), Some(&TenantRecord::new("viewer", ["read"])));
		assert_eq!(state.base()["t1"], TenantRecord::new("admin", ["*"]));
	}

	#[test]
	fn remove_is_idempotent() {
		let mut state = TenantState::new([grant("t1", "admin", &["*"])]);

		state.remove("missing");
		state.remove("t1");
		state.remove("t1");

		assert!(state.is_empty());
		assert_eq!(state.base().len(), 1);
	}

	#[test]
	fn add_then_remove_restores_previous_current() {
		let mut state = TenantState::new([grant("t1", "admin", &["*"])]);
		let before = state.current().clone();

		state.add(grant("t9", "member", &["read"]));
		state.remove("t9");

		assert_eq!(state.current(), &before);
	}

	#[test]
	fn reset_restores_base_and_is_idempotent() {
		let mut state = TenantState::new([grant("t1", "admin", &["*"])]);

		state.add(grant("t2", "member", &["read"]));
		state.remove("t1");
		state.reset();

		let once = state.current().clone();

		state.reset();

		assert_eq!(state.current(), &once);
		assert_eq!(state.current(), state.base());
		assert!(!state.contains("t2"));
	}

	#[test]
	fn reset_with_empty_base_clears_current() {
		let mut state = TenantState::default();

		state.add(grant("t1", "admin", &["*"]));
		state.reset();

		assert!(state.is_empty());
	}
}
