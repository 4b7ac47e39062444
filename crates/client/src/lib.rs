//! issueboard_client - CLI client for the issueboard feed and tracker.

pub mod cli;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod notify;
pub mod output;
pub mod store;

pub use client::BoardClient;
pub use error::{ClientError, Result};
