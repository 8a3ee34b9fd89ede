//! # Node Identity
//!
//! Every node in an outline carries an opaque [`NodeId`]. Ids are minted once, when a
//! node is created (add, duplicate, paste), and are never reused after the node is
//! deleted. That lets a stale selection or clipboard reference be told apart from a
//! node that happens to be created later.
//!
//! ## Id Sources
//!
//! Commands never build ids themselves; they ask an [`IdSource`]:
//!
//! - [`IdGenerator`]: production source. Combines the UTC timestamp in milliseconds,
//!   a process-wide monotonically increasing sequence and a random component, so
//!   bulk duplication inside the same millisecond never collides.
//! - [`SequentialIds`]: deterministic `prefix-1`, `prefix-2`, ... source for tests and
//!   hosts that need reproducible ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Shared across all generators so two independent generators in one process
/// still produce distinct ids.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Anything that can mint fresh node ids.
pub trait IdSource {
    fn next_id(&mut self) -> NodeId;
}

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    prefix: Option<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl IdSource for IdGenerator {
    fn next_id(&mut self) -> NodeId {
        let millis = Utc::now().timestamp_millis();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let random = Uuid::new_v4().simple().to_string();
        let body = format!("{:x}-{:x}-{}", millis, seq, &random[..12]);
        match &self.prefix {
            Some(prefix) => NodeId(format!("{}-{}", prefix, body)),
            None => NodeId(body),
        }
    }
}

/// Deterministic id source: `n-1`, `n-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("n")
    }
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> NodeId {
        let id = NodeId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
