//! Observability helpers: configuration advisories, issuance spans, and issuance counters.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to forward advisories to `tracing::warn!` and to emit
//!   `tenant_token.issue` spans carrying the `stage`, `typ`, and `alg` fields.
//! - Enable `metrics` to increment the `tenant_token_issue_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod advisory;
mod metrics;
mod tracing;

pub use self::{advisory::*, metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Outcome labels recorded for each issuance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueOutcome {
	/// Entry to `get_token`.
	Attempt,
	/// A signed token was returned.
	Success,
	/// The signer failed and the error was propagated.
	Failure,
}
impl IssueOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			IssueOutcome::Attempt => "attempt",
			IssueOutcome::Success => "success",
			IssueOutcome::Failure => "failure",
		}
	}
}
impl Display for IssueOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
