use std::io;

use thiserror::Error;

/// Failures of a platform probe.
///
/// The first two variants mean "the command gave us nothing" and are absorbed
/// by the check as missing data. `Parse` means the command answered with
/// something we cannot make sense of and stops the check.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("command `{command}` returned non-zero {status}")]
    CommandFailed { command: String, status: String },
    #[error("could not parse {context} from line {line:?}")]
    Parse { context: &'static str, line: String },
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl ProbeError {
    /// True when the external command could not deliver any output.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::CommandFailed { .. })
    }

    pub fn parse(context: &'static str, line: &str) -> Self {
        Self::Parse {
            context,
            line: line.trim().to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u8),
    #[error("invalid hexadecimal mask: {0:?}")]
    InvalidHex(String),
    #[error("invalid dotted-decimal mask: {0:?}")]
    InvalidDotted(String),
}
