//! Configuration management module.
//!
//! This module handles loading, parsing, and saving the transport configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **udp_server**: The shared UDP socket carrying uTP, DHT and STUN traffic
//! - **peer**: Client tag and version used to build the local peer id
//! - **rate_limit**: Upload and download ceilings in bytes per second
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_transport::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
