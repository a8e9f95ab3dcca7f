//! Ports between the check workflow and the operating system.
//!
//! The core crate implements [`NetworkProbe`] once per command dialect. Probes
//! never spawn processes themselves, they go through a [`CommandRunner`] so the
//! whole check can be replayed against recorded command output.

use std::net::Ipv4Addr;

use crate::error::ProbeError;
use crate::network::interface::InterfaceCandidate;

pub trait CommandRunner {
    /// Runs `program` with `args` and returns its standard output.
    ///
    /// A non-zero exit status is an error, whatever was printed.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProbeError>;
}

pub trait NetworkProbe {
    fn list_interfaces(&self) -> Result<Vec<InterfaceCandidate>, ProbeError>;
    /// `Ok(None)` when the interface output has no usable mask line.
    fn subnet_mask(&self, interface: &str) -> Result<Option<Ipv4Addr>, ProbeError>;
    /// The gateway token of the first default route, `Ok(None)` when there
    /// is none. Not always an address: `link#22` and `ppp0` are valid answers.
    fn default_gateway(&self) -> Result<Option<String>, ProbeError>;
}

/// Renders a command the way a user would type it, for logs and errors.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<&str>>()
        .join(" ")
}
