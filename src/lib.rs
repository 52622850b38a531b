//! Fetch a Gmail account's profile, labels, and most recent messages
//! concurrently and render them as a plain-text report.

pub mod cli;
pub mod email_content;
pub mod error;
pub mod gmail_api;
pub mod output;
pub mod types;
