use std::net::Ipv4Addr;

use tracing::debug;

use linkprobe_common::error::ProbeError;
use linkprobe_common::network::interface::InterfaceCandidate;
use linkprobe_common::network::mask;
use linkprobe_common::system::{CommandRunner, NetworkProbe};

/// Every interface block of `ifconfig` opens with `<name>: flags=...`.
const BLOCK_MARKER: &str = "flags=";
const LIVENESS_MARKERS: [&str; 2] = ["status: active", "RUNNING"];
/// `inet 192.168.1.23 netmask 0xffffff00 broadcast 192.168.1.255`
const NETMASK_POSITION: usize = 3;
/// `netstat -rn`: `default  <gateway>  UGScg  en0`
const GATEWAY_POSITION: usize = 1;

/// `ifconfig` / `netstat` probe for macOS and the BSDs.
pub struct BsdProbe<R> {
    runner: R,
}

impl<R: CommandRunner> BsdProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn ifconfig(&self, interface: &str) -> Result<String, ProbeError> {
        self.runner.run("ifconfig", &[interface])
    }
}

impl<R: CommandRunner> NetworkProbe for BsdProbe<R> {
    /// Lists interface blocks, then asks `ifconfig <name>` about each one.
    ///
    /// An interface whose own query fails is left out; it does not fail the
    /// listing.
    fn list_interfaces(&self) -> Result<Vec<InterfaceCandidate>, ProbeError> {
        let listing: String = self.runner.run("ifconfig", &[])?;

        let candidates = parse_interface_names(&listing)
            .into_iter()
            .filter_map(|name| match self.ifconfig(name) {
                Ok(detail) => Some(parse_interface_detail(name, &detail)),
                Err(e) => {
                    debug!("Skipping {name}: {e}");
                    None
                }
            })
            .collect();

        Ok(candidates)
    }

    fn subnet_mask(&self, interface: &str) -> Result<Option<Ipv4Addr>, ProbeError> {
        let detail: String = self.ifconfig(interface)?;
        Ok(parse_netmask(&detail))
    }

    fn default_gateway(&self) -> Result<Option<String>, ProbeError> {
        let routes: String = self.runner.run("netstat", &["-rn"])?;
        super::find_default_gateway(&routes, GATEWAY_POSITION)
    }
}

fn parse_interface_names(listing: &str) -> Vec<&str> {
    listing
        .lines()
        .filter(|line| line.contains(BLOCK_MARKER))
        .filter_map(|line| line.split(':').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Reads liveness and the IPv4 address out of a single interface block.
///
/// With several `inet` aliases the last one is reported.
fn parse_interface_detail(name: &str, detail: &str) -> InterfaceCandidate {
    let is_live: bool = LIVENESS_MARKERS
        .iter()
        .any(|marker| detail.contains(marker));

    let ip_address: Option<Ipv4Addr> = detail
        .lines()
        .filter(|line| line.contains("inet ") && !line.contains("inet6"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .filter_map(|token| token.parse().ok())
        .last();

    InterfaceCandidate::new(name, ip_address, is_live)
}

fn parse_netmask(detail: &str) -> Option<Ipv4Addr> {
    let line: &str = detail.lines().find(|line| line.contains("netmask "))?;
    let token: &str = line.split_whitespace().nth(NETMASK_POSITION)?;

    match mask::parse_mask_token(token) {
        Ok(mask) => Some(mask),
        Err(e) => {
            debug!("Ignoring netmask of {:?}: {e}", line.trim());
            None
        }
    }
}
