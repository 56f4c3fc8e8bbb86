//! Multi-tenant JWT claims builder—defaulted user identity, restorable tenant grants, and
//! pluggable signing in one small crate.
//!
//! A [`TokenBuilder`](builder::TokenBuilder) owns one issuance context: a fully defaulted
//! [`UserIdentity`](auth::UserIdentity), a mutable *current* tenant set, and an immutable *base*
//! tenant set captured at construction. Tenant mutations only touch the current set, and
//! [`reset`](builder::TokenBuilder::reset) restores it from the base snapshot. Issuance assembles
//! the claims and hands them to a [`Signer`](signer::Signer), which stamps `iat`, `iss`, and
//! `exp` and returns the compact token.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod builder;
pub mod error;
pub mod ext;
pub mod key;
pub mod obs;
pub mod signer;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

pub use builder::{IssueOptions, TokenBuilder, TokenBuilderOptions};
pub use jsonwebtoken::Algorithm;
#[cfg(test)] use color_eyre as _;
