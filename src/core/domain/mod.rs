//! Domain types.
//!
//! Core value types for the credential helper, independent of I/O.

pub mod credential;
pub mod path;
pub mod secret;

pub use credential::Credential;
pub use path::StorePath;
pub use secret::StoredSecret;
