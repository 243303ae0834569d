//! Process exit codes.

/// Exit codes for the textdupe binary.
///
/// - 0: Pass (the duplication score met the threshold)
/// - 1: General error (bad configuration, unreadable file, empty corpus)
/// - 2: Threshold failed (analysis completed, score below the threshold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Analysis completed and the score met the threshold.
    Pass = 0,
    /// An error prevented the analysis from producing a report.
    GeneralError = 1,
    /// Analysis completed but the score fell below the threshold.
    ThresholdFailed = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Pass => "TD000",
            Self::GeneralError => "TD001",
            Self::ThresholdFailed => "TD002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Pass.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ThresholdFailed.as_i32(), 2);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Pass.code_prefix(), "TD000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "TD001");
        assert_eq!(ExitCode::ThresholdFailed.code_prefix(), "TD002");
    }
}
