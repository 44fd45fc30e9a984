//! Extension lifecycle management for the Joomlatools Composer installer
//!
//! This crate handles:
//! - Locating and reading extension manifests
//! - Deriving the stable extension element identifier
//! - Bootstrapping the embedded Joomla application on demand
//! - Aggregating host error messages after failed operations
//! - The install/update/uninstall lifecycle itself

pub mod application;
pub mod element;
pub mod hooks;
pub mod installer;
pub mod manifest;
pub mod messages;
pub mod runtime;

pub use application::{
    Application, ApplicationFactory, ApplicationOptions, HostInstaller, PlatformVariant,
};
pub use element::resolve_element;
pub use hooks::PendingExtensions;
pub use installer::{ExtensionInstaller, PackageRepository};
pub use manifest::read_manifest;
pub use messages::error_descriptions;
pub use runtime::{RuntimeContext, RuntimeState};
