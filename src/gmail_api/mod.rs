//! Gmail API module split into logical submodules
//!
//! - auth: credential acquisition and keyring persistence
//! - client: typed authenticated GET operations
//! - fetch: two-phase concurrent snapshot orchestration

pub mod auth;
pub mod client;
pub mod fetch;

pub use auth::try_authenticate;
pub use client::GmailClient;
pub use fetch::{fetch_snapshot, DEFAULT_MESSAGE_LIMIT};

// Re-export auth constants
pub use auth::{KEYRING_SERVICE_NAME, KEYRING_USERNAME};
