//! Change-detecting feed state
//!
//! A [`Feed`] holds the last committed payload of one remote collection and
//! publishes it through a `watch` channel. Commits are gated twice:
//!
//! - by request token: only the most recently issued fetch may commit;
//! - by fingerprint: a payload identical to the committed one is dropped
//!   without waking subscribers.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::watch;

/// SHA-256 of the payload's JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self(hex::encode(Sha256::digest(&bytes))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Issued per fetch; a commit carrying an outdated token is discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What happened to a payload handed to [`Feed::commit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Published to subscribers
    Committed,
    /// Same fingerprint as the current payload
    Unchanged,
    /// A newer request was issued, or the feed was torn down
    Stale,
}

/// Committed payload as seen by subscribers
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub value: T,
    /// Number of commits so far; 0 for the initial placeholder
    pub version: u64,
    fingerprint: Option<Fingerprint>,
}

/// Last committed state of one polled collection
#[derive(Debug)]
pub struct Feed<T> {
    name: &'static str,
    issued: AtomicU64,
    tx: watch::Sender<Snapshot<T>>,
}

impl<T: Serialize + Clone> Feed<T> {
    /// Create a feed holding `initial`, with no fingerprint yet so the
    /// first fetched payload always commits.
    pub fn new(name: &'static str, initial: T) -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            value: initial,
            version: 0,
            fingerprint: None,
        });
        Self {
            name,
            issued: AtomicU64::new(0),
            tx,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Issue a token for a fetch that is about to start
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the newest issued token
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.issued.load(Ordering::SeqCst) == token.0
    }

    /// Invalidate every outstanding token. Results of fetches already in
    /// flight are dropped when they arrive.
    pub fn invalidate(&self) {
        self.issued.fetch_add(1, Ordering::SeqCst);
    }

    /// Publish `value` if `token` is current and the payload changed
    pub fn commit(&self, token: RequestToken, value: T) -> CommitOutcome {
        if !self.is_current(token) {
            tracing::debug!(feed = self.name, "Discarding stale response");
            return CommitOutcome::Stale;
        }

        let fingerprint = match Fingerprint::of(&value) {
            Ok(fp) => Some(fp),
            Err(e) => {
                tracing::warn!(feed = self.name, "Fingerprint failed, committing anyway: {e}");
                None
            }
        };

        let mut outcome = CommitOutcome::Unchanged;
        self.tx.send_if_modified(|snapshot| {
            if fingerprint.is_some() && snapshot.fingerprint == fingerprint {
                return false;
            }
            snapshot.value = value;
            snapshot.fingerprint = fingerprint;
            snapshot.version += 1;
            outcome = CommitOutcome::Committed;
            true
        });

        if outcome == CommitOutcome::Unchanged {
            tracing::debug!(feed = self.name, "Payload unchanged, skipping update");
        }
        outcome
    }

    /// Current committed value
    pub fn current(&self) -> T {
        self.tx.borrow().value.clone()
    }

    /// Number of commits so far
    pub fn version(&self) -> u64 {
        self.tx.borrow().version
    }

    /// Receive a notification on every commit
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }
}
