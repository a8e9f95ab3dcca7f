use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use tracing::debug;

use linkprobe_common::error::ProbeError;
use linkprobe_common::network::interface::InterfaceCandidate;
use linkprobe_common::system::NetworkProbe;

/// Reads interfaces and masks from the OS interface table.
///
/// The interface table has no notion of routes, so the gateway comes from the
/// command probe of the platform when there is one.
pub struct NativeProbe {
    routes: Option<Box<dyn NetworkProbe>>,
}

impl NativeProbe {
    pub fn new(routes: Option<Box<dyn NetworkProbe>>) -> Self {
        Self { routes }
    }
}

impl NetworkProbe for NativeProbe {
    fn list_interfaces(&self) -> Result<Vec<InterfaceCandidate>, ProbeError> {
        Ok(datalink::interfaces().iter().map(to_candidate).collect())
    }

    fn subnet_mask(&self, interface: &str) -> Result<Option<Ipv4Addr>, ProbeError> {
        Ok(datalink::interfaces()
            .iter()
            .find(|intf| intf.name == interface)
            .and_then(first_ipv4_net)
            .map(|net| net.mask()))
    }

    fn default_gateway(&self) -> Result<Option<String>, ProbeError> {
        match &self.routes {
            Some(probe) => probe.default_gateway(),
            None => {
                debug!("No routing table command on this platform");
                Ok(None)
            }
        }
    }
}

fn to_candidate(interface: &NetworkInterface) -> InterfaceCandidate {
    InterfaceCandidate::new(
        interface.name.clone(),
        first_ipv4_net(interface).map(|net| net.ip()),
        interface.is_up(),
    )
}

fn first_ipv4_net(interface: &NetworkInterface) -> Option<Ipv4Network> {
    interface.ips.iter().find_map(|ip| match ip {
        IpNetwork::V4(ipv4) => Some(*ipv4),
        IpNetwork::V6(_) => None,
    })
}
