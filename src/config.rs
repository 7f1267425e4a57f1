use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use glob::Pattern;

/// Default views root, relative to the project root.
pub const DEFAULT_VIEWS_DIR: &str = "resources/views";

/// Default JS entry scanned for component registrations.
pub const DEFAULT_APP_ENTRY: &str = "resources/js/app.js";

/// Default template filename suffix.
pub const DEFAULT_SUFFIX: &str = ".blade.php";

/// Path prefixes skipped unless `--no-default-excludes` is given.
pub const DEFAULT_EXCLUDES: &[&str] = &["vendor", "node_modules", "resources/views/vendor"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub views_dir: PathBuf,
    pub app_entry: PathBuf,
    /// Literal path prefixes or glob patterns, relative to `root`.
    pub excludes: Vec<String>,
    pub suffix: String,
    pub flag_custom_tags: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            views_dir: PathBuf::from(DEFAULT_VIEWS_DIR),
            app_entry: PathBuf::from(DEFAULT_APP_ENTRY),
            excludes: default_excludes(),
            suffix: DEFAULT_SUFFIX.to_string(),
            flag_custom_tags: true,
            verbose: false,
            format: OutputFormat::default(),
        }
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal path prefixes.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

impl ScanConfig {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty suffix or an invalid glob in `excludes`.
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            bail!("Template suffix must not be empty");
        }

        for pattern in self.excludes.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in excludes: \"{}\"", pattern))?;
        }

        Ok(())
    }

    pub fn views_root(&self) -> PathBuf {
        self.root.join(&self.views_dir)
    }

    pub fn app_entry_path(&self) -> PathBuf {
        self.root.join(&self.app_entry)
    }

    /// Path as shown in reports: relative to the root when possible.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
