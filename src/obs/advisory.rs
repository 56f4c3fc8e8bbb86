// self
use crate::_prelude::*;

/// Fire-and-forget sink for non-fatal configuration advisories.
pub trait AdvisorySink
where
	Self: Send + Sync,
{
	/// Accepts one warning-level message.
	fn warn(&self, message: &str);
}

/// Forwards advisories to `tracing::warn!` under the `tenant_token::advisory` target.
///
/// Messages are dropped when the `tracing` feature is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAdvisory;
impl AdvisorySink for TracingAdvisory {
	fn warn(&self, message: &str) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(target: "tenant_token::advisory", "{message}");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = message;
		}
	}
}

/// Keeps advisories in memory for tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemoryAdvisory(Mutex<Vec<String>>);
impl MemoryAdvisory {
	/// Returns a copy of every recorded message, oldest first.
	pub fn messages(&self) -> Vec<String> {
		self.0.lock().clone()
	}

	/// Number of recorded messages.
	pub fn len(&self) -> usize {
		self.0.lock().len()
	}

	/// Returns `true` if nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.0.lock().is_empty()
	}
}
impl AdvisorySink for MemoryAdvisory {
	fn warn(&self, message: &str) {
		self.0.lock().push(message.to_owned());
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn memory_advisory_records_in_order() {
		let sink = MemoryAdvisory::default();

		assert!(sink.is_empty());

		sink.warn("first");
		sink.warn("second");

		assert_eq!(sink.len(), 2);
		assert_eq!(sink.messages(), ["first", "second"]);
	}

	#[test]
	fn tracing_advisory_never_fails() {
		TracingAdvisory.warn("advisory without subscriber");
	}
}
