//! Host platform capability interfaces
//!
//! The installer never implements the Joomla runtime itself; it consumes it
//! through these traits. Implementors live in the embedding binary (or tests
//! can provide recording mocks).

use joomlatools_core::types::{ExtensionRecord, ExtensionType, Manifest, QueuedMessage};
use joomlatools_core::{Credentials, Result, Verbosity};
use std::path::Path;

/// Options passed to the application factory on first use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationOptions {
    /// Login name granted root privileges inside the application
    pub root_user: String,

    /// Log level forwarded to the host runtime
    pub log_level: Verbosity,
}

/// Which bootstrap sequence the host runtime requires.
///
/// Detected once per runtime context from the local project descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformVariant {
    /// The joomlatools/joomla-platform layout
    Platform,
    /// The traditional CMS layout
    Cms,
}

/// The host platform's extension installer object.
///
/// Owns the manifest document format: parsing happens behind this interface,
/// the core only reads the structured result.
pub trait HostInstaller {
    /// Point the installer at a package's extracted source tree
    fn set_source_path(&mut self, path: &Path);

    /// Parse the manifest at the configured source path.
    ///
    /// `Ok(None)` when no manifest document exists; a malformed document is
    /// a hard error.
    fn manifest(&mut self) -> Result<Option<Manifest>>;
}

/// The embedded host application capability.
///
/// Created at most once per runtime context; every lifecycle operation after
/// creation reuses the same handle.
pub trait Application {
    /// Install the extension at `path`; `false` means the host rejected it
    fn install(&mut self, path: &Path) -> Result<bool>;

    /// Update the extension at `path`; `false` means the host rejected it
    fn update(&mut self, path: &Path) -> Result<bool>;

    /// Uninstall an extension by its record id
    fn uninstall(&mut self, id: u64, extension_type: &ExtensionType) -> Result<bool>;

    /// Look up the extension record for an element, if the host knows it
    fn extension(&mut self, element: &str, extension_type: &ExtensionType)
        -> Option<ExtensionRecord>;

    /// Drain the queued diagnostic messages accumulated by the last operation
    fn drain_message_queue(&mut self) -> Vec<QueuedMessage>;

    /// The host's extension installer object
    fn installer(&mut self) -> &mut dyn HostInstaller;

    /// Authenticate the bootstrap user. Failure is fatal, no retry.
    fn authenticate(&mut self, credentials: &Credentials) -> Result<()>;

    /// Load a host plugin by group and name
    fn import_plugin(&mut self, group: &str, name: &str) -> Result<()>;

    /// Whether the vendor framework is active after plugin import
    fn has_framework(&self) -> bool;

    /// Whether the extension-support module has already been loaded
    fn has_support_module(&self) -> bool;

    /// Force-load the extension-support module through the host's service
    /// locator
    fn load_support_module(&mut self) -> Result<()>;

    /// Best-effort close of any session-like resource. Called once at
    /// teardown; must not fail.
    fn close_session(&mut self);
}

/// Factory producing the application handle.
///
/// `prepare_environment` runs at most once per runtime context, before any
/// `create` call: the host runtime expects a fully initialized environment
/// (request context, path constants) before an application object can exist.
pub trait ApplicationFactory {
    fn prepare_environment(&mut self, variant: PlatformVariant) -> Result<()>;

    fn create(&mut self, options: &ApplicationOptions) -> Result<Box<dyn Application>>;
}
