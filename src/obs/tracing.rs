// self
use crate::_prelude::*;

/// A span builder used around token issuance.
#[derive(Clone, Debug)]
pub struct IssueSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl IssueSpan {
	/// Creates a new span tagged with the stage, token type, and algorithm.
	pub fn new(stage: &'static str, token_type: &str, algorithm: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("tenant_token.issue", stage, typ = token_type, alg = algorithm);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, token_type, algorithm);

			Self {}
		}
	}

	/// Enters the span until the returned guard is dropped.
	pub fn entered(self) -> IssueSpanGuard {
		#[cfg(feature = "tracing")]
		{
			IssueSpanGuard { _guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			IssueSpanGuard {}
		}
	}
}

/// RAII guard returned by [`IssueSpan::entered`].
pub struct IssueSpanGuard {
	#[cfg(feature = "tracing")]
	_guard: tracing::span::EnteredSpan,
}
impl Debug for IssueSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("IssueSpanGuard(..)")
	}
}
