/// Datagrams buffered per connection before new arrivals are dropped.
pub const INBOUND_QUEUE_CAPACITY: usize = 100;
