use std::fmt;

use tracing::warn;

/// Command dialect family of the running operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// iproute2 (`ip -brief addr`, `ip addr show`, `ip route show`).
    Linux,
    /// `ifconfig` / `netstat -rn` as shipped by macOS and the BSDs.
    Bsd(String),
    Unsupported(String),
}

impl Platform {
    /// Identifies the running OS the way `uname -s` names it.
    pub fn detect() -> Self {
        match sys_info::os_type() {
            Ok(os_type) => Self::from_os_type(&os_type),
            Err(e) => {
                warn!("Could not identify the operating system: {e}");
                Self::Unsupported(String::from("unknown"))
            }
        }
    }

    pub fn from_os_type(os_type: &str) -> Self {
        match os_type.trim() {
            "Linux" => Self::Linux,
            os @ ("Darwin" | "FreeBSD" | "OpenBSD" | "NetBSD" | "DragonFly") => {
                Self::Bsd(os.to_string())
            }
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Linux => "Linux",
            Self::Bsd(os) | Self::Unsupported(os) => os,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
