//! Per-call expiry options for
//! [`TokenBuilder::get_token`](crate::builder::TokenBuilder::get_token).

// self
use crate::{_prelude::*, builder::DEFAULT_EXPIRES_IN, signer::ExpiresIn};

/// Expiry requested for one issuance.
///
/// An absolute instant takes precedence over a relative expression; with neither,
/// [`DEFAULT_EXPIRES_IN`] applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueOptions {
	/// Absolute expiry instant.
	pub expires_at: Option<OffsetDateTime>,
	/// Relative timespan expression such as `"15m"` or `"2h"`.
	pub expires_in: Option<String>,
}
impl IssueOptions {
	/// Options that fall back to the default lifetime.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an absolute expiry instant.
	pub fn expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.expires_at = Some(instant);

		self
	}

	/// Sets a relative timespan expression.
	pub fn expires_in(mut self, expression: impl Into<String>) -> Self {
		self.expires_in = Some(expression.into());

		self
	}

	/// Resolves the lifetime handed to the signer, measured from `now`.
	///
	/// Absolute instants become `ceil((at - now) / 1s)` whole seconds using millisecond
	/// timestamps; relative expressions pass through unchanged.
	pub fn resolve(&self, now: OffsetDateTime) -> ExpiresIn {
		match (self.expires_at, &self.expires_in) {
			(Some(instant), _) =>
				ExpiresIn::Seconds(ceil_seconds(unix_millis(instant) - unix_millis(now))),
			(None, Some(expression)) => ExpiresIn::Expression(expression.clone()),
			(None, None) => ExpiresIn::Expression(DEFAULT_EXPIRES_IN.to_owned()),
		}
	}
}

fn unix_millis(instant: OffsetDateTime) -> i128 {
	instant.unix_timestamp_nanos().div_euclid(1_000_000)
}

fn ceil_seconds(millis: i128) -> i64 {
	let seconds = millis / 1_000 + i128::from(millis % 1_000 > 0);

	i64::try_from(seconds).unwrap_or(if seconds.is_negative() { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	const NOW: OffsetDateTime = macros::datetime!(2025-01-01 00:00 UTC);

	#[test]
	fn default_is_fifteen_minutes() {
		assert_eq!(IssueOptions::new().resolve(NOW), ExpiresIn::Expression("15m".into()));
	}

	#[test]
	fn relative_expression_passes_through() {
		assert_eq!(
			IssueOptions::new().expires_in("2h").resolve(NOW),
			ExpiresIn::Expression("2h".into())
		);
	}

	#[test]
	fn absolute_rounds_up_to_whole_seconds() {
		assert_eq!(
			IssueOptions::new().expires_at(NOW + Duration::hours(1)).resolve(NOW),
			ExpiresIn::Seconds(3_600)
		);
		assert_eq!(
			IssueOptions::new().expires_at(NOW + Duration::milliseconds(1_001)).resolve(NOW),
			ExpiresIn::Seconds(2)
		);
		assert_eq!(
			IssueOptions::new().expires_at(NOW - Duration::milliseconds(1_500)).resolve(NOW),
			ExpiresIn::Seconds(-1)
		);
	}

	#[test]
	fn absolute_wins_over_relative() {
		let options =
			IssueOptions::new().expires_in("2h").expires_at(NOW + Duration::seconds(30));

		assert_eq!(options.resolve(NOW), ExpiresIn::Seconds(30));
	}
}
