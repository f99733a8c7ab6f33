//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the transport.
//!
//! # Utilities
//!
//! - Logging setup
//! - Percent encoding of binary identifiers
//! - Running blocking accounting work from async reader tasks
//! - Graceful shutdown waiting
//!
//! # Data Structures
//!
//! - `CustomError` - Boot-time error type
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_transport::common::common::{setup_logging, url_encode};
//!
//! setup_logging(&config);
//! let encoded = url_encode(&[0x2d, 0x41, 0xff]);
//! assert_eq!(encoded, "-A%FF");
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
