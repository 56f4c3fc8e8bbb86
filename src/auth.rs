//! Identity-domain types: tenant identifiers, user identities, tenant grants, and tenant state.

pub mod grant;
pub mod id;
pub mod state;
pub mod user;

pub use grant::*;
pub use id::*;
pub use state::*;
pub use user::*;
