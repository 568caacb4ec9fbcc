//! Insertion-ordered catalog of platform descriptors.

use crate::descriptor::PlatformDescriptor;
use indexmap::IndexMap;
use namesweep_core::PlatformName;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Reserved prefix marking metadata keys in the catalog document.
const METADATA_PREFIX: char = '$';

/// JSON field of a descriptor object holding the URL template.
const URL_FIELD: &str = "url";

/// The validated mapping of platform name to probe descriptor for one scan.
///
/// Iteration order is the catalog document's own key order; the scan
/// orchestrator treats that order as authoritative for probing and for the
/// ordering of results. The catalog is built once per scan session and is
/// immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<PlatformName, PlatformDescriptor>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed JSON document, applying the shape filter.
    ///
    /// An entry is included iff its key does not start with `$`, its value is
    /// a JSON object, and that object has a string `url` field. No template
    /// validation beyond this shape check is performed; malformed templates
    /// surface later as probes against the raw template URL.
    #[must_use]
    pub fn from_document(document: &Map<String, Value>) -> Self {
        let mut entries = IndexMap::new();

        for (key, value) in document {
            if key.starts_with(METADATA_PREFIX) {
                debug!(key = %key, "skipping metadata key");
                continue;
            }

            let Some(object) = value.as_object() else {
                debug!(key = %key, "skipping non-object catalog entry");
                continue;
            };

            let Some(url_template) = object.get(URL_FIELD).and_then(Value::as_str) else {
                debug!(key = %key, "skipping catalog entry without url template");
                continue;
            };

            let name = match PlatformName::new(key.clone()) {
                Ok(name) => name,
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping catalog entry with invalid name");
                    continue;
                }
            };

            let descriptor = PlatformDescriptor::new(name.clone(), url_template);
            entries.insert(name, descriptor);
        }

        Self { entries }
    }

    /// Add or replace a descriptor, preserving insertion order.
    pub fn insert(&mut self, descriptor: PlatformDescriptor) {
        self.entries.insert(descriptor.name.clone(), descriptor);
    }

    /// Look up a descriptor by platform name.
    #[must_use]
    pub fn get(&self, name: &PlatformName) -> Option<&PlatformDescriptor> {
        self.entries.get(name)
    }

    /// Whether the catalog contains a platform.
    #[must_use]
    pub fn contains(&self, name: &PlatformName) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of usable platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no usable platforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate descriptors in catalog (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformDescriptor> {
        self.entries.values()
    }

    /// Platform names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&PlatformName> {
        self.entries.keys().collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PlatformDescriptor;
    type IntoIter = indexmap::map::Values<'a, PlatformName, PlatformDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<PlatformDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = PlatformDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for descriptor in iter {
            catalog.insert(descriptor);
        }
        catalog
    }
}
