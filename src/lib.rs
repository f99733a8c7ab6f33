//! # Torrust-Transport
//!
//! The shared UDP transport layer of a BitTorrent client.
//!
//! ## Overview
//!
//! A single UDP socket carries three independent protocols: uTP for peer data
//! exchange, the DHT for peer discovery and STUN for address discovery. This
//! crate demultiplexes that socket, keeps the table of live uTP connections and
//! provides the hierarchical traffic accounting every data-carrying component
//! reports through.
//!
//! ## Features
//!
//! - **Datagram Classification**: O(1) header sniffing routes each datagram to DHT, STUN or uTP
//! - **Connection Registry**: One logical uTP connection per (connection id, endpoint), created on first sight
//! - **Traffic Accounting**: Upload/download totals and one-second speeds, rolled up parent-wards
//! - **Rate Limiting**: Runtime-adjustable byte ceilings enforced by pacing the reporting thread
//! - **Identity**: Peer id generation and info-hash construction from metadata or magnet hashes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_transport::config::structs::configuration::Configuration;
//! use torrust_transport::udp::udp::udp_service;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let (server, handles) = udp_service(&config.udp_server, statistics, dht, stun, rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, percent encoding and runtime helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`identity`] - Peer id and info-hash primitives
//! - [`stats`] - Traffic accounting and rate limiting
//! - [`structs`] - CLI argument parsing
//! - [`udp`] - Shared socket, datagram classifier and server loop
//! - [`utp`] - uTP connection registry

/// Common utilities and shared functionality.
///
/// Contains the logging setup, identifier percent encoding, the blocking
/// helper used around pacing calls and the custom error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and saving the TOML configuration.
pub mod config;

/// Peer id and info-hash primitives.
pub mod identity;

/// Hierarchical traffic accounting and rate limiting.
///
/// Every node keeps monotonic totals and speed estimates, forwards what it
/// records to its parent and optionally paces callers to a byte ceiling.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Shared UDP socket, datagram classification and reader tasks.
pub mod udp;

/// uTP connection registry and connection handles.
pub mod utp;
