//! Unique identifier generation for users created without an explicit id.

// crates.io
use uuid::Uuid;

/// Produces a fresh, globally unique identifier on demand.
pub trait IdGenerator
where
	Self: Send + Sync,
{
	/// Generates a new identifier.
	fn generate(&self) -> String;
}

/// Random (v4) UUID generator rendered in hyphenated lowercase form.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;
impl IdGenerator for UuidGenerator {
	fn generate(&self) -> String {
		Uuid::new_v4().to_string()
	}
}
