//! CLI argument definitions using clap.
//!
//! Every scan setting has a flag; the defaults reproduce a stock Laravel
//! layout (`resources/views`, `resources/js/app.js`, `.blade.php`).

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    DEFAULT_APP_ENTRY, DEFAULT_EXCLUDES, DEFAULT_SUFFIX, DEFAULT_VIEWS_DIR, OutputFormat,
    ScanConfig,
};

/// Scan Blade templates for Vue usage (directives, event and prop
/// shorthands, registered components and unknown custom tags).
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Views directory, relative to the project root
    #[arg(long, default_value = DEFAULT_VIEWS_DIR)]
    pub views_dir: PathBuf,

    /// JS entry file with Vue component registrations, relative to the project root
    #[arg(long, default_value = DEFAULT_APP_ENTRY)]
    pub app_entry: PathBuf,

    /// Path prefix or glob to skip, relative to the project root (repeatable)
    #[arg(long = "exclude", value_name = "PATH")]
    pub excludes: Vec<String>,

    /// Do not apply the built-in excludes (vendor, node_modules, resources/views/vendor)
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Template filename suffix
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Only report definite Vue hits, not unknown custom tags
    #[arg(long)]
    pub no_custom_tags: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, env = "FINDVUE_VERBOSE")]
    pub verbose: bool,
}

impl Arguments {
    pub fn into_config(self) -> ScanConfig {
        let mut excludes: Vec<String> = if self.no_default_excludes {
            Vec::new()
        } else {
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
        };
        excludes.extend(self.excludes);

        ScanConfig {
            root: self.root,
            views_dir: self.views_dir,
            app_entry: self.app_entry,
            excludes,
            suffix: self.suffix,
            flag_custom_tags: !self.no_custom_tags,
            verbose: self.verbose,
            format: self.format,
        }
    }
}
