pub mod speed_sampler;
pub mod pace_state;
pub mod pace_interrupt;
pub mod traffic_control;
pub mod traffic_statistics;
