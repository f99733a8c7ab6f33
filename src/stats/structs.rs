/// Trailing one-second throughput estimator.
pub mod speed_sampler;

/// Per-direction pacing buffer and checkpoint.
pub mod pace_state;

/// Interruptible sleep used while pacing.
pub mod pace_interrupt;

/// Runtime-mutable ceilings shared by limited nodes.
pub mod traffic_control;

/// Accounting node.
pub mod traffic_statistics;

/// Serializable view of a node.
pub mod traffic_snapshot;
