//! # API Shared
//!
//! Wire models shared by the Empress gateway's HTTP surface.
//!
//! Holds:
//! - Request/response schemas for the six REST operations
//! - The uniform JSON error body
//! - The health service used by uptime probes

#![warn(rust_2018_idioms)]

pub mod health;
pub mod models;

pub use health::HealthService;
pub use models::*;
