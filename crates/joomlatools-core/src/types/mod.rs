//! Type definitions for the extension installer

pub mod extension;
pub mod manifest;
pub mod package;

pub use extension::{Element, ExtensionRecord, ExtensionType, QueuedMessage, Severity};
pub use manifest::{FileNode, Manifest};
pub use package::PackageDescriptor;
