/// Receiver of classified datagrams.
pub mod datagram_handler;
