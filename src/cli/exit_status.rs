use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Scan completed, with or without findings
/// - `Error` (2): Scan could not run (unreadable views root, invalid config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed; findings are reported, not failed on.
    Success,
    /// Scan failed before a report could be produced.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
