use crate::udp::enums::datagram_route::DatagramRoute;

impl DatagramRoute {
    pub fn name(&self) -> &'static str {
        match self {
            DatagramRoute::Dht => "dht",
            DatagramRoute::Stun => "stun",
            DatagramRoute::Utp(_) => "utp",
        }
    }
}
