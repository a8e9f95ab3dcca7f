use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::network::mask;

/// Why a listed interface did not make it into the active set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SkipReason {
    /// The interface is administratively down (or not running on BSD).
    IsDown,
    /// The interface carries no IPv4 address.
    NoIpv4Address,
    /// The mask lookup returned nothing for this interface.
    NoSubnetMask,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason: &str = match self {
            Self::IsDown => "interface is down",
            Self::NoIpv4Address => "no IPv4 address",
            Self::NoSubnetMask => "no subnet mask found",
        };
        f.write_str(reason)
    }
}

/// One entry of the interface listing, before its mask is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCandidate {
    pub name: String,
    pub ip_address: Option<Ipv4Addr>,
    pub is_up: bool,
}

impl InterfaceCandidate {
    pub fn new(name: impl Into<String>, ip_address: Option<Ipv4Addr>, is_up: bool) -> Self {
        Self {
            name: name.into(),
            ip_address,
            is_up,
        }
    }

    /// Returns the address to report when the interface qualifies for mask resolution.
    pub fn check_viability(&self) -> Result<Ipv4Addr, SkipReason> {
        if !self.is_up {
            return Err(SkipReason::IsDown);
        }
        self.ip_address.ok_or(SkipReason::NoIpv4Address)
    }
}

/// An interface that is up and has both an IPv4 address and a subnet mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInterface {
    pub name: String,
    pub ip_address: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
}

impl ActiveInterface {
    pub fn new(name: impl Into<String>, ip_address: Ipv4Addr, subnet_mask: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ip_address,
            subnet_mask,
        }
    }

    pub fn prefix_len(&self) -> Option<u8> {
        mask::mask_to_prefix(self.subnet_mask)
    }

    /// The network the interface sits in, when the mask is contiguous.
    pub fn network(&self) -> Option<Ipv4Network> {
        let prefix: u8 = self.prefix_len()?;
        let net = Ipv4Network::new(self.ip_address, prefix).ok()?;
        Ipv4Network::new(net.network(), prefix).ok()
    }
}

impl fmt::Display for ActiveInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interface {} is active with IP address: {}, Subnet Mask: {}",
            self.name, self.ip_address, self.subnet_mask
        )
    }
}
