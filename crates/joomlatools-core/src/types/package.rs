//! Package descriptor handed over by the package manager

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable reference to a package under management.
///
/// Identity is `vendor/name`; the pretty name is what the package manager
/// shows the user and what error messages carry. Created by the collaborator
/// per lifecycle event, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub vendor: String,
    pub name: String,
    pub pretty_name: String,
}

impl PackageDescriptor {
    /// Create a descriptor from its vendor and name
    pub fn new(vendor: impl Into<String>, name: impl Into<String>) -> Self {
        let vendor = vendor.into();
        let name = name.into();
        let pretty_name = format!("{}/{}", vendor, name);

        Self {
            vendor,
            name,
            pretty_name,
        }
    }

    /// Override the display name shown in messages
    pub fn with_pretty_name(mut self, pretty_name: impl Into<String>) -> Self {
        self.pretty_name = pretty_name.into();
        self
    }

    /// Case-insensitive vendor comparison
    pub fn is_vendor(&self, vendor: &str) -> bool {
        self.vendor.eq_ignore_ascii_case(vendor)
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_name)
    }
}
