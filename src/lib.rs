//! Dockhand - resolve a compose stack's .env and drive its lifecycle.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── args          # Lenient flag pre-pass
//! │   ├── deploy        # Resolve, write, dispatch
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # dockhand.toml settings
//!     ├── domain/       # ConfigSet, Identity, SecretBundle
//!     ├── env           # .env reader and writer
//!     ├── generate      # Credential generation
//!     ├── launcher      # Pipeline entry point
//!     ├── lifecycle/    # Action dispatch
//!     │   ├── mod       # Orchestrator trait
//!     │   └── compose   # docker compose implementation
//!     ├── resolve       # Proposed set and merge
//!     └── secrets       # SMTP secret bundle loading
//! ```
//!
//! # Resolution
//!
//! Every run proposes a full configuration (literal defaults, generated
//! credentials, identity-derived hosts and the SMTP bundle) and merges it with
//! the `.env` the previous run wrote. Persisted values win, so credentials are
//! generated once and then reused; stale keys are dropped.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{ConfigSet, Identity, SecretBundle};
pub use crate::core::launcher::Launcher;
pub use crate::error::{Error, Result};
