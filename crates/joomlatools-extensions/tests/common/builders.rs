//! Fixture builders for manifests and packages

#![allow(dead_code)]

use joomlatools_core::types::{ExtensionType, FileNode, Manifest, PackageDescriptor};

/// Shorthand for a package descriptor
pub fn package(vendor: &str, name: &str) -> PackageDescriptor {
    PackageDescriptor::new(vendor, name)
}

/// Fluent builder for manifest fixtures
pub struct ManifestBuilder {
    manifest_type: ExtensionType,
    name: String,
    files: Vec<FileNode>,
}

impl ManifestBuilder {
    pub fn component(name: &str) -> Self {
        Self {
            manifest_type: ExtensionType::Component,
            name: name.to_string(),
            files: Vec::new(),
        }
    }

    pub fn module() -> Self {
        Self {
            manifest_type: ExtensionType::Module,
            name: "module".to_string(),
            files: Vec::new(),
        }
    }

    pub fn plugin() -> Self {
        Self {
            manifest_type: ExtensionType::Plugin,
            name: "plugin".to_string(),
            files: Vec::new(),
        }
    }

    pub fn with_type(mut self, manifest_type: ExtensionType) -> Self {
        self.manifest_type = manifest_type;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_module_file(mut self, name: &str) -> Self {
        self.files.push(FileNode::module(name));
        self
    }

    pub fn with_plugin_file(mut self, name: &str) -> Self {
        self.files.push(FileNode::plugin(name));
        self
    }

    pub fn with_plain_file(mut self) -> Self {
        self.files.push(FileNode::plain());
        self
    }

    pub fn build(self) -> Manifest {
        Manifest {
            manifest_type: self.manifest_type,
            name: self.name,
            files: self.files,
        }
    }
}
