//! # joomlatools-core
//!
//! Core library for the Joomlatools Composer installer providing:
//! - The package / extension / manifest data model
//! - Project configuration (credentials, verbosity)
//! - The error taxonomy shared across crates

pub mod config;
pub mod error;
pub mod types;

pub use config::{CredentialOverrides, Credentials, ProjectDescriptor, Verbosity};
pub use error::{Error, Result};
