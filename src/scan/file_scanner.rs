//! Per-file hit detection.
//!
//! Combines tag discovery, attribute rules and the component registry into
//! a line-ordered list of hits for one template.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{
    attributes::scan_attributes,
    registry::ComponentRegistry,
    standard_tags::is_standard_tag,
    tags::{RegexTagFinder, TagFinder},
};
use crate::hit::{Hit, HitKind};

/// Lowercase tag-name prefixes of Blade components (`<x-alert>`, `<flux:button>`).
pub const BLADE_COMPONENT_PREFIXES: &[&str] = &["x-", "flux:"];

/// Standard tag that would otherwise be flagged as custom by templating setups.
const PLACEHOLDER_TAG: &str = "template";

/// Maps byte offsets to 1-based line numbers.
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let newlines = content
            .bytes()
            .enumerate()
            .filter_map(|(i, b)| (b == b'\n').then_some(i))
            .collect();
        Self { newlines }
    }

    /// 1 + number of `\n` strictly before `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }
}

fn is_blade_component(lower_name: &str) -> bool {
    BLADE_COMPONENT_PREFIXES
        .iter()
        .any(|prefix| lower_name.starts_with(prefix))
}

/// Scans template content using a configurable tag finder.
pub struct FileScanner<'a, F = RegexTagFinder> {
    finder: F,
    registry: &'a ComponentRegistry,
    flag_custom_tags: bool,
}

impl<'a> FileScanner<'a> {
    pub fn new(registry: &'a ComponentRegistry, flag_custom_tags: bool) -> Self {
        Self::with_finder(RegexTagFinder, registry, flag_custom_tags)
    }
}

impl<'a, F: TagFinder> FileScanner<'a, F> {
    pub fn with_finder(finder: F, registry: &'a ComponentRegistry, flag_custom_tags: bool) -> Self {
        Self {
            finder,
            registry,
            flag_custom_tags,
        }
    }

    /// Reads `path` and scans it. Invalid UTF-8 is decoded lossily.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Hit>> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.scan_content(&content))
    }

    /// Returns hits sorted by line; hits on the same line keep discovery order.
    pub fn scan_content(&self, content: &str) -> Vec<Hit> {
        let lines = LineIndex::new(content);
        let mut hits = Vec::new();

        for tag in self.finder.find_tags(content) {
            let lower_name = tag.name.to_lowercase();
            if is_blade_component(&lower_name) {
                continue;
            }

            let line = lines.line_of(tag.offset);
            let is_component = self.registry.contains_tag(&lower_name);

            if is_component {
                hits.push(Hit::tag(line, HitKind::VueComponentTag, tag.name));
            }

            hits.extend(
                scan_attributes(tag.attrs)
                    .into_iter()
                    .map(|attr| Hit::new(line, attr.kind, attr.attr)),
            );

            if self.flag_custom_tags
                && !is_component
                && !is_standard_tag(&lower_name)
                && lower_name != PLACEHOLDER_TAG
            {
                hits.push(Hit::tag(line, HitKind::CustomTag, tag.name));
            }
        }

        hits.sort_by_key(|hit| hit.line);
        hits
    }
}
