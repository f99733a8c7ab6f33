/// Upload or download.
pub mod traffic_direction;
