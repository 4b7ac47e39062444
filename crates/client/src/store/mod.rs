//! Credential storage implementations.
//!
//! Provides `CredentialStore` implementations for:
//! - A JSON file under the user's config directory
//! - In-memory (for tests and embedding)

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
