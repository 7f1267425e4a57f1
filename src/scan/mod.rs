//! Heuristic detection of Vue usage inside template files.
//!
//! - `tags`: opening-tag discovery behind the `TagFinder` trait
//! - `attributes`: directive / event / binding / mustache rules
//! - `registry`: component names registered in the JS app entry
//! - `standard_tags`: built-in HTML/SVG names
//! - `file_scanner`: per-file combination of the above

pub mod attributes;
pub mod file_scanner;
pub mod registry;
pub mod standard_tags;
pub mod tags;

pub use file_scanner::{FileScanner, LineIndex};
pub use registry::{ComponentRegistry, load_components};
pub use tags::{RegexTagFinder, TagFinder, TagOccurrence};
