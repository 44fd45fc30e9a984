//! Parsed extension manifest
//!
//! The manifest document format is owned by the host platform; this is the
//! structured result its installer hands back. Created transiently per
//! lifecycle call and discarded after element resolution.

use crate::types::ExtensionType;
use serde::{Deserialize, Serialize};

/// Parsed extension manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared extension type
    #[serde(rename = "type")]
    pub manifest_type: ExtensionType,

    /// Declared extension name
    #[serde(default)]
    pub name: String,

    /// File declarations in document order. Order is significant: element
    /// resolution takes the first node exposing a matching attribute.
    #[serde(default)]
    pub files: Vec<FileNode>,
}

impl Manifest {
    pub fn new(manifest_type: ExtensionType, name: impl Into<String>) -> Self {
        Self {
            manifest_type,
            name: name.into(),
            files: Vec::new(),
        }
    }
}

/// One file declaration from the manifest's `files` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Module name attribute, present on module manifests
    #[serde(default)]
    pub module: Option<String>,

    /// Plugin name attribute, present on plugin manifests
    #[serde(default)]
    pub plugin: Option<String>,
}

impl FileNode {
    /// A plain file entry carrying no type-specific attribute
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self {
            module: Some(name.into()),
            plugin: None,
        }
    }

    pub fn plugin(name: impl Into<String>) -> Self {
        Self {
            module: None,
            plugin: Some(name.into()),
        }
    }
}
