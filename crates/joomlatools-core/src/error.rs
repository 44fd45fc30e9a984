//! Error types for joomlatools-core

use thiserror::Error;

/// Result type alias using joomlatools-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the extension installer.
///
/// Soft outcomes (missing manifest, unresolved element, extension record
/// not found on the host) are modelled as `Option`/`bool` results and never
/// appear here. Every variant below is fatal for the lifecycle call that
/// raised it.
#[derive(Error, Debug)]
pub enum Error {
    /// Uninstall was requested for a package the repository does not track
    #[error("Package is not installed: {package}")]
    PackageNotInstalled { package: String },

    /// The host platform rejected an install or update operation
    #[error("Error while {action} {package}{details}")]
    HostOperation {
        action: String,
        package: String,
        details: String,
    },

    /// Authenticating against the host application failed
    #[error("Authentication failed for user: {username}")]
    Authentication { username: String },

    /// The package ships a manifest the host installer cannot parse
    #[error("Invalid extension manifest at {path}: {message}")]
    ManifestParse { path: String, message: String },

    /// Preparing the embedded host runtime environment failed
    #[error("Host runtime bootstrap failed: {message}")]
    Bootstrap { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a package not installed error
    pub fn package_not_installed(package: impl Into<String>) -> Self {
        Self::PackageNotInstalled {
            package: package.into(),
        }
    }

    /// Create a host operation error from the diagnostic descriptions
    /// collected after a failed install or update.
    ///
    /// The message always carries the package's pretty name; the joined
    /// descriptions are appended only when any were collected.
    pub fn host_operation(
        action: impl Into<String>,
        package: impl Into<String>,
        descriptions: Vec<String>,
    ) -> Self {
        let details = if descriptions.is_empty() {
            String::new()
        } else {
            format!(":\n{}", descriptions.join("\n"))
        };

        Self::HostOperation {
            action: action.into(),
            package: package.into(),
            details,
        }
    }

    /// Create an authentication error
    pub fn authentication(username: impl Into<String>) -> Self {
        Self::Authentication {
            username: username.into(),
        }
    }

    /// Create a manifest parse error
    pub fn manifest_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a bootstrap error
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap {
            message: message.into(),
        }
    }
}
