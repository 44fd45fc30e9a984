//! The extension lifecycle coordinator
//!
//! Maps package-manager lifecycle events onto host-platform extension
//! operations: placement is delegated to the external repository first, then
//! the embedded application performs the Joomla-side install, update or
//! removal.

use crate::application::{Application, ApplicationFactory};
use crate::element::resolve_element;
use crate::manifest::read_manifest;
use crate::messages::error_descriptions;
use crate::runtime::RuntimeContext;
use joomlatools_core::config::CredentialOverrides;
use joomlatools_core::types::PackageDescriptor;
use joomlatools_core::{Credentials, Error, Result, Verbosity};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Installer type identifiers this coordinator handles
pub const INSTALLER_TYPES: &[&str] = &["joomlatools-installer", "joomla-installer"];

/// Vendor whose packages need the extension-support module preloaded
const SUPPORT_VENDOR: &str = "joomlatools";

/// The support package itself, which must never trigger the preload
const SUPPORT_PACKAGE: &str = "extman";

/// Host plugin providing the vendor framework
const FRAMEWORK_PLUGIN_GROUP: &str = "system";
const FRAMEWORK_PLUGIN_NAME: &str = "koowa";

/// External package manager surface the coordinator relies on.
///
/// Placement, bookkeeping and path resolution stay with the package manager;
/// the coordinator only adds the host-platform steps around them.
pub trait PackageRepository {
    /// Where the package's files are (or will be) extracted
    fn install_path(&self, package: &PackageDescriptor) -> PathBuf;

    /// Whether the repository currently tracks the package
    fn has_package(&self, package: &PackageDescriptor) -> bool;

    /// Base placement of the package files
    fn install(&mut self, package: &PackageDescriptor) -> Result<()>;

    /// Base replacement of the package files
    fn update(&mut self, initial: &PackageDescriptor, target: &PackageDescriptor) -> Result<()>;

    /// Base bookkeeping removal of the package
    fn uninstall(&mut self, package: &PackageDescriptor) -> Result<()>;
}

/// Extension lifecycle coordinator.
///
/// One instance per process; the embedded application is created lazily on
/// the first lifecycle call and reused afterwards.
pub struct ExtensionInstaller<R: PackageRepository> {
    repository: R,
    runtime: RuntimeContext,
}

impl<R: PackageRepository> ExtensionInstaller<R> {
    /// Create the coordinator.
    ///
    /// Credentials are merged over the defaults immediately; the application
    /// itself stays lazy until the first lifecycle call needs it.
    pub fn new(
        repository: R,
        project_root: impl Into<PathBuf>,
        overrides: Option<&CredentialOverrides>,
        verbosity: Verbosity,
        factory: Box<dyn ApplicationFactory>,
    ) -> Self {
        let credentials = Credentials::merged(overrides);
        let runtime = RuntimeContext::new(project_root, credentials, verbosity, factory);

        Self {
            repository,
            runtime,
        }
    }

    /// Whether this coordinator handles packages of `package_type`
    pub fn supports(&self, package_type: &str) -> bool {
        INSTALLER_TYPES.contains(&package_type)
    }

    /// Install a package into the host platform.
    ///
    /// Placement runs first; a failed host install raises an error carrying
    /// the package's pretty name and the collected error descriptions.
    pub fn install(&mut self, package: &PackageDescriptor) -> Result<()> {
        self.repository.install(package)?;

        let install_path = self.repository.install_path(package);
        let application = self.runtime.ensure_application()?;

        ensure_support_module(application, package)?;

        info!("Installing {} into Joomla", package);
        if !application.install(&install_path)? {
            let descriptions = error_descriptions(application);
            return Err(Error::host_operation(
                "installing",
                &package.pretty_name,
                descriptions,
            ));
        }

        Ok(())
    }

    /// Update a package, targeting the new revision's install path
    pub fn update(&mut self, initial: &PackageDescriptor, target: &PackageDescriptor) -> Result<()> {
        self.repository.update(initial, target)?;

        let install_path = self.repository.install_path(target);
        let application = self.runtime.ensure_application()?;

        ensure_support_module(application, target)?;

        info!("Updating Joomla extension {}", target);
        if !application.update(&install_path)? {
            let descriptions = error_descriptions(application);
            return Err(Error::host_operation(
                "updating",
                &target.pretty_name,
                descriptions,
            ));
        }

        Ok(())
    }

    /// Uninstall a package.
    ///
    /// The package must be tracked by the repository. An unresolvable
    /// manifest or element means there is nothing to remove on the host
    /// platform; repository bookkeeping removal runs regardless.
    pub fn uninstall(&mut self, package: &PackageDescriptor) -> Result<()> {
        if !self.repository.has_package(package) {
            return Err(Error::package_not_installed(&package.pretty_name));
        }

        let install_path = self.repository.install_path(package);
        let application = self.runtime.ensure_application()?;

        if let Some(element) = resolve_known_element(application, &install_path)? {
            if let Some(record) = application.extension(&element.name, &element.extension_type) {
                info!("Removing Joomla extension {}", package);

                // The host's own uninstall result is advisory: removal
                // continues with the repository either way.
                match application.uninstall(record.id, &record.extension_type) {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!("Host refused to uninstall {}, continuing removal", package);
                    }
                    Err(error) => {
                        warn!(%error, "Host uninstall failed for {}, continuing removal", package);
                    }
                }
            }
        }

        self.repository.uninstall(package)
    }

    /// Whether the host platform has a record for this package's extension
    pub fn is_installed(&mut self, package: &PackageDescriptor) -> Result<bool> {
        let install_path = self.repository.install_path(package);
        let application = self.runtime.ensure_application()?;

        let Some(element) = resolve_known_element(application, &install_path)? else {
            return Ok(false);
        };

        Ok(application
            .extension(&element.name, &element.extension_type)
            .is_some())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn runtime(&self) -> &RuntimeContext {
        &self.runtime
    }
}

/// Read the manifest and resolve its element, collapsing the soft outcomes
/// (no manifest, unidentifiable extension) into `None`
fn resolve_known_element(
    application: &mut dyn Application,
    install_path: &Path,
) -> Result<Option<joomlatools_core::types::Element>> {
    let Some(manifest) = read_manifest(application.installer(), install_path)? else {
        return Ok(None);
    };

    let element = resolve_element(&manifest);
    if !element.is_known() {
        debug!(path = %install_path.display(), "Extension cannot be identified from manifest");
        return Ok(None);
    }

    Ok(Some(element))
}

/// Preload the vendor's extension-support module before installing one of
/// its companion packages.
///
/// Applies only to joomlatools packages other than the support package
/// itself. The force-load happens once: when the framework marker is present
/// but the support module is not yet loaded.
fn ensure_support_module(
    application: &mut dyn Application,
    package: &PackageDescriptor,
) -> Result<()> {
    if !package.is_vendor(SUPPORT_VENDOR) || package.is_named(SUPPORT_PACKAGE) {
        return Ok(());
    }

    application.import_plugin(FRAMEWORK_PLUGIN_GROUP, FRAMEWORK_PLUGIN_NAME)?;

    if application.has_framework() && !application.has_support_module() {
        debug!("Loading extension-support module for {}", package);
        application.load_support_module()?;
    }

    Ok(())
}
