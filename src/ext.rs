//! Collaborator contracts consumed by the token builder (clock, identifier generation).
//!
//! Each contract ships with a production implementation plus a deterministic one so issuance
//! can be replayed in tests without touching the wall clock.

pub mod clock;
pub mod id;

pub use clock::*;
pub use id::*;
