//! Platform descriptor: one usable entry of the catalog.

use namesweep_core::PlatformName;
use serde::{Deserialize, Serialize};

/// Placeholder token substituted with the username when building profile URLs.
pub const PLACEHOLDER: &str = "{}";

/// One entry in the platform catalog.
///
/// The `url_template` is expected to contain exactly one [`PLACEHOLDER`]
/// token, but this is deliberately unchecked: the catalog loader performs a
/// shape check only, and a template without a placeholder simply probes the
/// raw template URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
    /// Platform display name, also the catalog key
    pub name: PlatformName,
    /// Profile URL template with a `{}` placeholder for the username
    pub url_template: String,
}

impl PlatformDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub fn new(name: PlatformName, url_template: impl Into<String>) -> Self {
        Self {
            name,
            url_template: url_template.into(),
        }
    }

    /// Whether the template carries the username placeholder.
    ///
    /// Informational only; missing placeholders are permitted.
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        self.url_template.contains(PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlatformName {
        PlatformName::new(s).expect("valid platform name")
    }

    #[test]
    fn test_has_placeholder() {
        let descriptor = PlatformDescriptor::new(name("GitHub"), "https://github.com/{}");
        assert!(descriptor.has_placeholder());
    }

    #[test]
    fn test_missing_placeholder_permitted() {
        let descriptor = PlatformDescriptor::new(name("Broken"), "https://example.com/profile");
        assert!(!descriptor.has_placeholder());
    }
}
