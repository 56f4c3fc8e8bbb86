//! Timespan expressions (`"15m"`, `"2 days"`, `"1.5h"`) converted to milliseconds.
//!
//! Grammar: optional `-`, a decimal number (`10`, `1.5`, `.5`), optional spaces, and an optional
//! case-insensitive unit. A bare number is milliseconds. Expressions longer than
//! [`MAX_EXPRESSION_LEN`] are rejected.

/// Longest expression accepted by [`parse_millis`].
pub const MAX_EXPRESSION_LEN: usize = 100;

const SECOND: f64 = 1_000.;
const MINUTE: f64 = SECOND * 60.;
const HOUR: f64 = MINUTE * 60.;
const DAY: f64 = HOUR * 24.;
const WEEK: f64 = DAY * 7.;
const YEAR: f64 = DAY * 365.25;

/// Parses a timespan expression into milliseconds, or `None` if it is not one.
pub fn parse_millis(expression: &str) -> Option<f64> {
	if expression.is_empty() || expression.len() > MAX_EXPRESSION_LEN {
		return None;
	}

	let split = expression
		.find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
		.unwrap_or(expression.len());
	let (number, rest) = expression.split_at(split);

	if !is_decimal(number) {
		return None;
	}

	let value = number.parse::<f64>().ok()?;
	let factor = unit_factor(&rest.trim_start_matches(' ').to_ascii_lowercase())?;

	Some(value * factor)
}

fn is_decimal(number: &str) -> bool {
	let digits = number.strip_prefix('-').unwrap_or(number);
	let (whole, fraction) = match digits.split_once('.') {
		Some((whole, fraction)) => (whole, Some(fraction)),
		None => (digits, None),
	};

	whole.chars().all(|c| c.is_ascii_digit())
		&& match fraction {
			Some(fraction) => !fraction.is_empty() && fraction.chars().all(|c| c.is_ascii_digit()),
			None => !whole.is_empty(),
		}
}

fn unit_factor(unit: &str) -> Option<f64> {
	let factor = match unit {
		"" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.,
		"s" | "sec" | "secs" | "second" | "seconds" => SECOND,
		"m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
		"h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
		"d" | "day" | "days" => DAY,
		"w" | "week" | "weeks" => WEEK,
		"y" | "yr" | "yrs" | "year" | "years" => YEAR,
		_ => return None,
	};

	Some(factor)
}
