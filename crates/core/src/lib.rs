//! issueboard_core - domain types and pure logic for the issueboard project.
//!
//! Everything in this crate is I/O-free: the post model and feed ordering,
//! the markup sanitizer, and the credential storage contract. HTTP and
//! filesystem concerns live in `issueboard_client`.

pub mod credentials;
pub mod post;
pub mod sanitize;

pub use credentials::{CredentialStore, Credentials};
pub use post::{Post, PostPayload};
