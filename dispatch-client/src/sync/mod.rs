//! Polling synchronization
//!
//! [`Feed`] decides whether a fetched payload is worth publishing,
//! [`Poller`] decides when to fetch.

mod feed;
mod poller;

pub use feed::{CommitOutcome, Feed, Fingerprint, RequestToken, Snapshot};
pub use poller::Poller;
