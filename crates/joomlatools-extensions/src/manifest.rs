//! Locating and reading package manifests

use crate::application::HostInstaller;
use joomlatools_core::types::Manifest;
use joomlatools_core::Result;
use std::path::Path;
use tracing::debug;

/// Read the extension manifest for a package installed at `install_path`.
///
/// Fails softly (`Ok(None)`) when the install path is not a directory or the
/// host finds no manifest document there. A malformed document propagates as
/// a hard error from the host installer.
pub fn read_manifest(
    installer: &mut dyn HostInstaller,
    install_path: &Path,
) -> Result<Option<Manifest>> {
    if !install_path.is_dir() {
        debug!(path = %install_path.display(), "Install path is not a directory, no manifest");
        return Ok(None);
    }

    installer.set_source_path(install_path);
    installer.manifest()
}
