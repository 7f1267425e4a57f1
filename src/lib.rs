//! findvue - Vue usage finder for Blade templates
//!
//! findvue is a CLI tool and library that walks a Laravel views directory
//! and flags templates mixing Vue into Blade: `v-*` directives, `@event` and
//! `:prop` shorthands, `@{{` mustache escapes, components registered in the
//! JS app entry, and unknown custom tags. Detection is heuristic and
//! regex-based; there is no HTML parsing.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Scan settings and defaults
//! - `hit`: Hit and hit-kind definitions
//! - `report`: Per-run findings in walk order
//! - `reporter`: Text and JSON output
//! - `scan`: Tag finder, attribute rules, component registry, file scanner
//! - `utils`: Shared utility functions
//! - `walker`: Directory walk, exclusions and aggregation

pub mod cli;
pub mod config;
pub mod hit;
pub mod report;
pub mod reporter;
pub mod scan;
pub mod utils;
pub mod walker;
