//! Package-manager lifecycle hook glue
//!
//! The installer subscribes to the manager's post-dependency-resolution
//! event to batch-activate extensions queued during resolution. The
//! activation pass is currently a no-op over each pending entry and is kept
//! as the hook point for future batch activation.

use joomlatools_core::types::PackageDescriptor;
use joomlatools_core::Result;
use tracing::debug;

/// Event the activation pass subscribes to
pub const POST_RESOLUTION_EVENT: &str = "post-dependency-resolution";

/// Queue of packages awaiting batch activation
#[derive(Debug, Default)]
pub struct PendingExtensions {
    packages: Vec<PackageDescriptor>,
}

impl PendingExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a package for the next activation pass
    pub fn push(&mut self, package: PackageDescriptor) {
        self.packages.push(package);
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn packages(&self) -> &[PackageDescriptor] {
        &self.packages
    }

    /// Walk the pending list after dependency resolution.
    ///
    /// Performs no host operation per entry; the pass exists so an
    /// activation step can be added without changing the hook wiring.
    pub fn activate_all(&mut self) -> Result<()> {
        for package in &self.packages {
            debug!("No batch activation step for {}", package);
        }

        Ok(())
    }
}
