use anyhow::Result;
use colored::Colorize;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::{
    reporter::{print_report, print_skipped_warning},
    walker,
};

/// Runs one scan from parsed arguments and prints the report.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` once a report was printed, findings or not
/// - `Err` if the views root cannot be read or the configuration is invalid
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let config = args.into_config();
    let result = walker::run(&config)?;

    if config.verbose {
        eprintln!(
            "{} {} template(s) scanned, {} known component name(s)",
            "info:".bold().cyan(),
            result.files_scanned,
            result.components.len()
        );
        if !result.components.is_empty() {
            eprintln!(
                "{} known components: {}",
                "info:".bold().cyan(),
                result.components.join(", ")
            );
        }
    }

    print_report(&result.report, config.format)?;
    print_skipped_warning(result.skipped_count, config.verbose);

    Ok(ExitStatus::Success)
}
