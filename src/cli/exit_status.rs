use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command completed; a check found every catalog complete
/// - `Failure` (1): a check found empty or untranslated entries
/// - `Error` (2): the command could not run (missing catalog, invalid task file,
///   backup failure, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
