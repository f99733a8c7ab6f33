/// Where a datagram was routed.
pub mod datagram_route;

/// Reasons a datagram could not be classified.
pub mod classify_error;
