//! Extension identity and host diagnostic types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared extension type from a package manifest.
///
/// A closed set; anything the host does not recognize is carried verbatim in
/// `Other` and treated like a component for element derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtensionType {
    Component,
    Module,
    Plugin,
    Other(String),
}

impl ExtensionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Component => "component",
            Self::Module => "module",
            Self::Plugin => "plugin",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ExtensionType {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "component" => Self::Component,
            "module" => Self::Module,
            "plugin" => Self::Plugin,
            _ => Self::Other(value),
        }
    }
}

impl From<ExtensionType> for String {
    fn from(value: ExtensionType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The stable identifier the host platform uses to look up an extension.
///
/// An empty name means the extension could not be identified from its
/// manifest; that is a valid soft outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub extension_type: ExtensionType,
}

impl Element {
    /// Whether the manifest yielded a usable identifier
    pub fn is_known(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Extension record resolved by the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    pub id: u64,
    pub element: String,
    pub extension_type: ExtensionType,
}

/// Severity of a host diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

/// One entry from the host application's message queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedMessage {
    pub severity: Severity,
    pub text: String,
}

impl QueuedMessage {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}
