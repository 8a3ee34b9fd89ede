//! # Outliner Architecture
//!
//! Outliner is the editing core of a hierarchical outline: a forest of titled sections
//! that can be added, renamed, deleted, duplicated, cut and pasted, and reordered by
//! drag. It has no UI, no storage and no file format. A host hands it a forest,
//! forwards user actions, and renders the snapshots it gets back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns tree, selection, clipboard, drag gesture, ids       │
//! │  - One command per action, result installed wholesale       │
//! │  - Returns a Snapshot after every operation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, drag.rs)                     │
//! │  - Pure functions: &Tree in, CmdResult (new Tree) out       │
//! │  - Total: unknown ids are no-ops with a warning message     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - find / locate / siblings, pre-order iteration            │
//! │  - Invariant checks (unique ids)                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshots, Not Shared State
//!
//! Every command clones the snapshot it is given and returns the modified clone. The
//! caller swaps it in. With a single mutator this means a reader never sees a
//! half-applied operation.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`, `drag.rs`): thorough unit tests on fixture
//!    trees with deterministic ids ([`id::SequentialIds`]).
//! 2. **API** (`api.rs`): dispatch and selection/clipboard bookkeeping.
//! 3. **Properties** (`tests/`): uniqueness and round-trip invariants under random
//!    operation sequences.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade
//! - [`commands`]: one module per mutation
//! - [`drag`]: drag gesture state machine
//! - [`selection`]: selected id + clipboard slot
//! - [`clipboard`]: the single-entry cut/copy slot
//! - [`store`]: lookups, traversal and invariant checks
//! - [`model`]: `Node`, `Tree`, `ParentRef`
//! - [`id`]: node id type and id sources
//! - [`config`]: layered configuration
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod id;
pub mod model;
pub mod selection;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
