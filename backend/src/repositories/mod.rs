//! Repository layer for data access
//!
//! Repositories handle storage operations and return domain types.

pub mod credentials;

pub use credentials::{CredentialError, CredentialRecord, CredentialRepository};
