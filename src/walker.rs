//! Directory walk over the views root.
//!
//! Applies exclusions and the suffix filter, runs the file scanner on every
//! remaining template and accumulates the report. Per-file problems are
//! counted and skipped; only an unreadable views root aborts the run.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    config::{ScanConfig, is_glob_pattern},
    report::Report,
    scan::{ComponentRegistry, FileScanner, load_components},
    utils::normalize_path,
};

/// Result of walking and scanning the views root.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub report: Report,
    pub files_scanned: usize,
    pub skipped_count: usize,
    /// Known component names, sorted.
    pub components: Vec<String>,
}

/// Path exclusion rules, matched against root-relative normalized paths.
pub struct ExcludeFilter {
    /// Normalized prefixes without `./` or a trailing slash.
    prefixes: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExcludeFilter {
    /// Invalid globs are dropped; `ScanConfig::validate` rejects them up front.
    pub fn new(root: &Path, excludes: &[String]) -> Self {
        let (globs, literals): (Vec<&String>, Vec<&String>) =
            excludes.iter().partition(|e| is_glob_pattern(e));

        let prefixes = literals
            .into_iter()
            .map(|exclude| {
                let exclude = Path::new(exclude);
                normalize_path(exclude.strip_prefix(root).unwrap_or(exclude))
            })
            .filter(|prefix| !prefix.is_empty())
            .collect();
        let patterns = globs
            .into_iter()
            .filter_map(|glob| Pattern::new(glob).ok())
            .collect();

        Self { prefixes, patterns }
    }

    pub fn is_excluded(&self, relative: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
            || self.patterns.iter().any(|p| p.matches(relative))
    }
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

fn load_registry(config: &ScanConfig) -> ComponentRegistry {
    let app_entry = config.app_entry_path();
    match load_components(&app_entry) {
        Ok(loaded) => {
            if !loaded.from_file {
                warn(
                    config.verbose,
                    format_args!(
                        "App entry not found, no components known: {}",
                        app_entry.display()
                    ),
                );
            }
            loaded.registry
        }
        Err(e) => {
            warn(config.verbose, format_args!("{:#}", e));
            ComponentRegistry::default()
        }
    }
}

/// Walks the views root and scans every matching template.
///
/// Returns an error only when the configuration is invalid or the views
/// root itself cannot be enumerated.
pub fn run(config: &ScanConfig) -> Result<ScanResult> {
    config.validate()?;

    let views_root = config.views_root();
    fs::read_dir(&views_root)
        .with_context(|| format!("Cannot read views directory: {}", views_root.display()))?;

    let registry = load_registry(config);
    let scanner = FileScanner::new(&registry, config.flag_custom_tags);
    let excludes = ExcludeFilter::new(&config.root, &config.excludes);

    let mut result = ScanResult {
        components: registry.names().map(str::to_string).collect(),
        ..Default::default()
    };

    for entry in WalkDir::new(&views_root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Cannot read views directory: {}", views_root.display())
                });
            }
            Err(e) => {
                result.skipped_count += 1;
                warn(config.verbose, format_args!("Cannot access path: {}", e));
                continue;
            }
        };

        // Symlinks are kept unless they point at a directory; a dangling
        // one fails to read and is counted as skipped.
        let path = entry.path();
        let file_type = entry.file_type();
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }
        if file_type.is_symlink() && path.is_dir() {
            continue;
        }

        let relative = normalize_path(&config.display_path(path));
        if excludes.is_excluded(&relative) {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&config.suffix) {
            continue;
        }

        match scanner.scan_file(path) {
            Ok(hits) => {
                result.files_scanned += 1;
                result.report.record(relative, hits);
            }
            Err(e) => {
                result.skipped_count += 1;
                warn(config.verbose, format_args!("{:#}", e));
            }
        }
    }

    Ok(result)
}
