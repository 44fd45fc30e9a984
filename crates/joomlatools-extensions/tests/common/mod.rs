//! Common test utilities for joomlatools-extensions
//!
//! This module provides shared test infrastructure including:
//! - Builders for manifest and package fixtures
//! - Recording mocks for the host application, factory and repository
//! - A ready-wired coordinator setup

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;

pub use builders::*;
pub use mocks::*;

use joomlatools_core::config::CredentialOverrides;
use joomlatools_core::types::{Manifest, PackageDescriptor};
use joomlatools_core::Verbosity;
use joomlatools_extensions::ExtensionInstaller;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A coordinator wired to recording mocks, rooted in a temp directory
pub struct Setup {
    pub temp: TempDir,
    pub app_state: Arc<Mutex<AppState>>,
    pub factory_state: Arc<Mutex<FactoryState>>,
    pub repo: MockRepository,
    pub installer: ExtensionInstaller<MockRepository>,
}

impl Setup {
    pub fn new() -> Self {
        Self::with_config(None, Verbosity::Normal)
    }

    pub fn with_config(overrides: Option<CredentialOverrides>, verbosity: Verbosity) -> Self {
        let temp = TempDir::new().unwrap();
        let app_state: Arc<Mutex<AppState>> = Arc::default();
        let factory_state: Arc<Mutex<FactoryState>> = Arc::default();
        let repo = MockRepository::rooted(temp.path());

        let factory = MockFactory::new(factory_state.clone(), app_state.clone());
        let installer = ExtensionInstaller::new(
            repo.clone(),
            temp.path(),
            overrides.as_ref(),
            verbosity,
            Box::new(factory),
        );

        Self {
            temp,
            app_state,
            factory_state,
            repo,
            installer,
        }
    }

    /// Create the package's install directory on disk and return its path
    pub fn create_install_dir(&self, package: &PackageDescriptor) -> PathBuf {
        let path = self.repo.install_path_for(package);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Mark the package as tracked by the repository, with its directory
    /// created on disk
    pub fn track(&self, package: &PackageDescriptor) -> PathBuf {
        self.repo.track(package);
        self.create_install_dir(package)
    }

    /// Configure the manifest the host installer will return
    pub fn set_manifest(&self, manifest: Manifest) {
        self.app_state.lock().unwrap().manifest = Some(manifest);
    }

    /// Write the project descriptor at the setup's root
    pub fn write_project_descriptor(&self, content: &str) {
        std::fs::write(self.temp.path().join("composer.json"), content).unwrap();
    }
}
