use std::net::Ipv4Addr;

use tracing::debug;

use linkprobe_common::error::ProbeError;
use linkprobe_common::network::interface::InterfaceCandidate;
use linkprobe_common::network::mask;
use linkprobe_common::system::{CommandRunner, NetworkProbe};

/// Operational state `ip -brief` prints for an interface that is up.
const STATE_UP: &str = "UP";
/// `ip route show`: `default via <gateway> dev <iface> ...`
const GATEWAY_POSITION: usize = 2;

/// iproute2 probe.
pub struct LinuxProbe<R> {
    runner: R,
}

impl<R: CommandRunner> LinuxProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> NetworkProbe for LinuxProbe<R> {
    fn list_interfaces(&self) -> Result<Vec<InterfaceCandidate>, ProbeError> {
        let output: String = self.runner.run("ip", &["-brief", "addr"])?;
        Ok(parse_brief_addr(&output))
    }

    fn subnet_mask(&self, interface: &str) -> Result<Option<Ipv4Addr>, ProbeError> {
        let output: String = self.runner.run("ip", &["addr", "show", interface])?;
        Ok(parse_inet_mask(&output))
    }

    fn default_gateway(&self) -> Result<Option<String>, ProbeError> {
        let output: String = self.runner.run("ip", &["route", "show"])?;
        super::find_default_gateway(&output, GATEWAY_POSITION)
    }
}

/// Parses `ip -brief addr`, one interface per line:
///
/// ```text
/// lo               UNKNOWN        127.0.0.1/8 ::1/128
/// eth0@if12        UP             172.17.0.2/16
/// ```
fn parse_brief_addr(output: &str) -> Vec<InterfaceCandidate> {
    output
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let name: &str = tokens.next()?;
            let state: &str = tokens.next().unwrap_or_default();
            let ip_address: Option<Ipv4Addr> = tokens.find_map(parse_cidr_address);

            Some(InterfaceCandidate::new(
                strip_link_parent(name),
                ip_address,
                state == STATE_UP,
            ))
        })
        .collect()
}

/// `eth0@if12` names the veth peer; `ip addr show` only accepts `eth0`.
fn strip_link_parent(name: &str) -> &str {
    name.split_once('@').map_or(name, |(name, _)| name)
}

fn parse_cidr_address(token: &str) -> Option<Ipv4Addr> {
    let address: &str = token.split_once('/').map_or(token, |(address, _)| address);
    address.parse().ok()
}

/// Finds the first `inet` line of `ip addr show <iface>` and converts its
/// prefix length to a mask.
fn parse_inet_mask(output: &str) -> Option<Ipv4Addr> {
    let line: &str = output.lines().find(|line| line.contains("inet "))?;
    let prefix: &str = line
        .split_whitespace()
        .nth(1)
        .and_then(|cidr| cidr.split_once('/'))
        .map(|(_, prefix)| prefix)?;

    match prefix.parse::<u8>().map(mask::prefix_to_mask) {
        Ok(Ok(mask)) => Some(mask),
        _ => {
            debug!("Ignoring unusable prefix {prefix:?} in {:?}", line.trim());
            None
        }
    }
}
