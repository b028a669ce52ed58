//! Data models
//!
//! Snapshots of records owned by the remote order and vendor services.
//! Every field is defaulted on decode, `null` included, so a partial
//! payload still renders.

pub mod delivery;
pub(crate) mod lenient;
pub mod vendor;

// Re-exports
pub use delivery::*;
pub use vendor::*;
