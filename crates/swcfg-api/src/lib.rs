// swcfg-api: Async Rust client for the Meraki Dashboard API (organizations, networks, switch ports)

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{DEFAULT_BASE_URL, DashboardClient};
pub use error::Error;
pub use transport::TransportConfig;
