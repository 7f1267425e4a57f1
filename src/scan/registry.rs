//! Known component names, collected from the JS app entry.

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

use crate::utils::to_kebab_case;

// Vue 2 global registration: Vue.component("name", ...)
static LEGACY_REGISTRATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)Vue\.component\(\s*['"]([^'"]+)['"]\s*,"#).unwrap()
});

// Vue 3 app instance registration: app.component("name", ...)
static APP_REGISTRATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bapp\.component\(\s*['"]([^'"]+)['"]\s*,"#).unwrap()
});

/// Set of component tag names registered by the application.
///
/// Holds the names exactly as registered plus kebab-case forms derived from
/// PascalCase ones. Lookups are case-insensitive. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    names: BTreeSet<String>,
    lookup: HashSet<String>,
}

impl ComponentRegistry {
    /// Builds a registry from raw JS source text.
    pub fn from_source(source: &str) -> Self {
        let registered = LEGACY_REGISTRATION_REGEX
            .captures_iter(source)
            .chain(APP_REGISTRATION_REGEX.captures_iter(source))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()));

        Self::from_names(registered)
    }

    /// Builds a registry from registered names, adding derived kebab-case forms.
    pub fn from_names<I>(registered: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut names = BTreeSet::new();
        for name in registered {
            if !name.contains('-') && name.chars().any(|c| c.is_ascii_uppercase()) {
                names.insert(to_kebab_case(&name));
            }
            names.insert(name);
        }

        let lookup = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lookup }
    }

    /// Case-insensitive membership test for a tag name.
    pub fn contains_tag(&self, tag_name: &str) -> bool {
        self.lookup.contains(&tag_name.to_lowercase())
    }

    /// All names, sorted and deduplicated.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Result of loading the component registry.
pub struct RegistryLoadResult {
    pub registry: ComponentRegistry,
    /// True if the app entry existed and was read.
    pub from_file: bool,
}

/// Loads the registry from `path`.
///
/// A missing file yields an empty registry. A file that exists but cannot be
/// read is an error; callers treat it as recoverable.
pub fn load_components(path: &Path) -> Result<RegistryLoadResult> {
    if !path.is_file() {
        return Ok(RegistryLoadResult {
            registry: ComponentRegistry::default(),
            from_file: false,
        });
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read app entry: {}", path.display()))?;
    let source = String::from_utf8_lossy(&bytes);

    Ok(RegistryLoadResult {
        registry: ComponentRegistry::from_source(&source),
        from_file: true,
    })
}
