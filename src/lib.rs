//! git-credential-gopass - Use gopass as git's credential helper.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── verb          # get / store / erase, as called by git
//! │   ├── configure     # Install as credential.helper
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── protocol      # key=value line codec
//!     ├── domain/       # Credential, StorePath, StoredSecret
//!     ├── helper        # Verb handlers over a SecretStore
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── gopass    # gopass CLI backend
//!     │   └── memory    # In-process backend
//!     ├── config        # Settings resolution
//!     ├── git           # git config invocation
//!     └── signal        # Interrupt -> cancellation token
//! ```
//!
//! # Example
//!
//! ```
//! use git_credential_gopass::core::domain::{Credential, StorePath};
//!
//! let request = Credential {
//!     username: Some("alice".to_string()),
//!     ..Credential::for_host("example.com")
//! };
//! let path = StorePath::derive(&request, "").unwrap();
//! assert_eq!(path.as_str(), "git/example.com/alice");
//! ```

pub mod cli;
pub mod core;
pub mod error;
