//! Deriving the stable extension identifier from a manifest

use joomlatools_core::types::{Element, ExtensionType, FileNode, Manifest};
use regex::Regex;
use std::sync::LazyLock;

/// Prefix the host platform expects on component elements
const COMPONENT_PREFIX: &str = "com_";

/// Characters allowed in a component element; everything else is stripped
static ELEMENT_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid element filter pattern"));

/// Derive the extension element from a parsed manifest.
///
/// Modules and plugins take the first file node (in document order) carrying
/// a non-empty matching attribute; components and unknown types derive the
/// element from the declared name. An empty element name is a valid outcome
/// meaning the extension cannot be identified.
pub fn resolve_element(manifest: &Manifest) -> Element {
    let name = match &manifest.manifest_type {
        ExtensionType::Module => first_attribute(&manifest.files, |file| file.module.as_deref()),
        ExtensionType::Plugin => first_attribute(&manifest.files, |file| file.plugin.as_deref()),
        ExtensionType::Component | ExtensionType::Other(_) => component_element(&manifest.name),
    };

    Element {
        name,
        extension_type: manifest.manifest_type.clone(),
    }
}

/// First non-empty attribute value in document order, or empty
fn first_attribute<'a, F>(files: &'a [FileNode], attribute: F) -> String
where
    F: Fn(&'a FileNode) -> Option<&'a str>,
{
    files
        .iter()
        .filter_map(attribute)
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Lowercase, strip disallowed characters and prefix with `com_` exactly once
fn component_element(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = ELEMENT_FILTER.replace_all(&lowered, "");

    if stripped.starts_with(COMPONENT_PREFIX) {
        stripped.into_owned()
    } else {
        format!("{}{}", COMPONENT_PREFIX, stripped)
    }
}
