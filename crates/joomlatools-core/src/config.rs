//! Project configuration loading and merging
//!
//! The installer reads its settings from the composer.json style project
//! descriptor: the package name (used to detect the platform layout) and an
//! optional `joomla` section under `config` carrying admin credentials.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default admin group id assigned to the bootstrap user
pub const DEFAULT_ADMIN_GROUP: u32 = 8;

/// Credentials used to authenticate against the embedded host application.
///
/// Built by merging the project's `joomla` config section over fixed
/// defaults; read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Display name of the bootstrap user
    pub name: String,

    /// Login name, also used as the application's root user
    pub username: String,

    /// Group memberships
    pub groups: Vec<u32>,

    /// Email address
    pub email: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            username: "root".to_string(),
            groups: vec![DEFAULT_ADMIN_GROUP],
            email: "root@localhost.home".to_string(),
        }
    }
}

impl Credentials {
    /// Merge the project-supplied overrides over the defaults.
    ///
    /// Absent fields keep their default value; an absent section yields the
    /// defaults unchanged.
    pub fn merged(overrides: Option<&CredentialOverrides>) -> Self {
        let mut credentials = Self::default();

        if let Some(overrides) = overrides {
            if let Some(name) = &overrides.name {
                credentials.name = name.clone();
            }
            if let Some(username) = &overrides.username {
                credentials.username = username.clone();
            }
            if let Some(groups) = &overrides.groups {
                credentials.groups = groups.clone();
            }
            if let Some(email) = &overrides.email {
                credentials.email = email.clone();
            }
        }

        credentials
    }
}

/// The `joomla` section of the project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialOverrides {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub groups: Option<Vec<u32>>,

    #[serde(default)]
    pub email: Option<String>,
}

/// Parsed composer.json project descriptor.
///
/// Only the fields the installer needs; everything else in the document is
/// owned by the package manager and ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDescriptor {
    /// Package identity (`vendor/name`)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub config: ProjectSettings,
}

/// The `config` object of the project descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub joomla: Option<CredentialOverrides>,
}

impl ProjectDescriptor {
    /// Read a project descriptor from disk.
    ///
    /// A missing file is a soft outcome (`Ok(None)`); malformed JSON is a
    /// hard error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No project descriptor found");
                return Ok(None);
            }
            Err(error) => return Err(error.into()),
        };

        let descriptor: Self = serde_json::from_str(&content)?;
        Ok(Some(descriptor))
    }

    /// The credential overrides from the `joomla` config section, if any
    pub fn credential_overrides(&self) -> Option<&CredentialOverrides> {
        self.config.joomla.as_ref()
    }
}

/// Output verbosity, derived from the package manager's I/O interface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Debug,
}

impl Verbosity {
    /// Derive the verbosity from the manager's I/O flags.
    ///
    /// Debug wins over very-verbose wins over verbose.
    pub fn from_io_flags(verbose: bool, very_verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if very_verbose {
            Self::VeryVerbose
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }
}
