//! # Connectivity Report
//!
//! The structured outcome of one physical layer check, plus the events emitted
//! while the check is still running so a presenter can stream its output.

use std::fmt;

use crate::network::interface::{ActiveInterface, SkipReason};

/// Something the user should be told that is not a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No probe exists for this operating system.
    UnsupportedPlatform(String),
    /// The interface listing command failed; the interface list is empty.
    ListingFailed(String),
    /// A command answered with unparseable output; later steps were skipped.
    Aborted(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(_) => {
                f.write_str("Physical layer check is not supported on this OS.")
            }
            Self::ListingFailed(e) => write!(f, "Error checking interfaces: {e}"),
            Self::Aborted(e) => write!(f, "An unexpected error occurred: {e}"),
        }
    }
}

/// Emitted in order while a check runs.
#[derive(Debug, Clone, Copy)]
pub enum CheckEvent<'a> {
    /// The listing command answered with this many entries.
    InterfacesListed(usize),
    InterfaceActive(&'a ActiveInterface),
    InterfaceSkipped { name: &'a str, reason: SkipReason },
    /// The routing table is about to be queried.
    GatewayLookup,
    Gateway(&'a str),
    Notice(&'a Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityReport {
    /// Operating system the probe was selected for.
    pub platform: String,
    pub interfaces: Vec<ActiveInterface>,
    /// Raw gateway token of the default route.
    pub gateway: Option<String>,
    pub notices: Vec<Notice>,
}

impl ConnectivityReport {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            interfaces: Vec::new(),
            gateway: None,
            notices: Vec::new(),
        }
    }

    pub fn has_active_interfaces(&self) -> bool {
        !self.interfaces.is_empty()
    }

    pub fn was_aborted(&self) -> bool {
        self.notices.iter().any(|n| matches!(n, Notice::Aborted(_)))
    }

    /// True when no probe ran because the OS has no command dialect.
    pub fn is_unsupported(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, Notice::UnsupportedPlatform(_)))
    }
}
