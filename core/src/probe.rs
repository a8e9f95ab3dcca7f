//! Platform implementations of [`NetworkProbe`].
//!
//! Each probe owns a [`CommandRunner`] and knows which commands its platform
//! answers and where the interesting tokens sit in their output. Selection
//! happens once, at startup, in [`select_probe`].

use linkprobe_common::error::ProbeError;
use linkprobe_common::system::{CommandRunner, NetworkProbe};

use crate::platform::Platform;

mod bsd;
mod linux;
mod native;

pub use bsd::BsdProbe;
pub use linux::LinuxProbe;
pub use native::NativeProbe;

/// Marker every routing table dialect uses for the default route.
const DEFAULT_ROUTE_MARKER: &str = "default";

/// Picks the command dialect of `platform`.
pub fn select_probe<R>(platform: &Platform, runner: R) -> Result<Box<dyn NetworkProbe>, ProbeError>
where
    R: CommandRunner + 'static,
{
    match platform {
        Platform::Linux => Ok(Box::new(LinuxProbe::new(runner))),
        Platform::Bsd(_) => Ok(Box::new(BsdProbe::new(runner))),
        Platform::Unsupported(os) => Err(ProbeError::UnsupportedPlatform(os.clone())),
    }
}

/// Reads interfaces from the OS interface table and keeps the command dialect
/// of `platform`, if any, for the routing table.
pub fn select_native_probe<R>(platform: &Platform, runner: R) -> Box<dyn NetworkProbe>
where
    R: CommandRunner + 'static,
{
    Box::new(NativeProbe::new(select_probe(platform, runner).ok()))
}

/// Scans a routing table for the first default route and returns the token
/// at `position` on that line, as printed.
///
/// Interface routes put a link name there (`link#22`, `ppp0`) and macOS
/// scopes link-local gateways (`fe80::1%en0`), so the token is not parsed.
/// A default route too short to have the token is a parse error.
pub(crate) fn find_default_gateway(
    routes: &str,
    position: usize,
) -> Result<Option<String>, ProbeError> {
    let Some(line) = routes.lines().find(|line| line.contains(DEFAULT_ROUTE_MARKER)) else {
        return Ok(None);
    };

    line.split_whitespace()
        .nth(position)
        .map(|token| Some(token.to_string()))
        .ok_or_else(|| ProbeError::parse("default gateway", line))
}
