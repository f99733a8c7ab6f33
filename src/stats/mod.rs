//! Hierarchical traffic accounting and rate limiting.
//!
//! Every component that moves payload bytes (uTP connections, peer sessions,
//! the process-wide totals) reports through a `TrafficStatistics` node. A node
//! keeps monotonic upload/download totals, a one-second speed estimate per
//! direction and, when it enforces a ceiling, paces the calling thread so the
//! observed rate stays under the configured bytes per second.
//!
//! # Hierarchy
//!
//! Nodes form a tree through a non-owning parent reference. Recording on a
//! child rolls the same amount up to its parent before local bookkeeping, so
//! a connection's traffic is always reflected in the global totals. Each level
//! paces independently; there is no lock spanning several nodes.
//!
//! # Pacing
//!
//! Bytes are buffered per direction. Once the buffer reaches the ceiling, or a
//! second has passed since the last decision, the caller holding the pacing
//! lock sleeps for whatever is left of the time those bytes should have taken.
//! `TrafficControl::interrupt()` cuts every pending and future sleep short.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use torrust_transport::stats::structs::traffic_statistics::TrafficStatistics;
//!
//! let root = Arc::new(TrafficStatistics::root());
//! let connection = TrafficStatistics::child_of(&root);
//! connection.upload(512);
//! assert_eq!(root.upload_size(), 512);
//! ```

/// Traffic direction enumeration.
pub mod enums;

/// Implementation blocks for accounting, sampling and pacing.
pub mod impls;

/// Accounting data structures.
pub mod structs;
