//! # Subnet Mask Normalization
//!
//! Platform commands print masks in different notations: `ip` appends a CIDR
//! prefix to the address, BSD `ifconfig` prints a hexadecimal word such as
//! `0xffffff00`. Everything here converts to a dotted-decimal [`Ipv4Addr`].

use std::net::Ipv4Addr;

use pnet::ipnetwork::{self, Ipv4Network};

use crate::error::MaskError;

/// Converts a CIDR prefix length (0-32) to its dotted-decimal mask.
pub fn prefix_to_mask(prefix: u8) -> Result<Ipv4Addr, MaskError> {
    Ipv4Network::new(Ipv4Addr::UNSPECIFIED, prefix)
        .map(|net| net.mask())
        .map_err(|_| MaskError::PrefixOutOfRange(prefix))
}

/// Splits a raw 32-bit mask into its four octets.
pub fn numeric_to_mask(mask: u32) -> Ipv4Addr {
    Ipv4Addr::new(
        ((mask >> 24) & 0xFF) as u8,
        ((mask >> 16) & 0xFF) as u8,
        ((mask >> 8) & 0xFF) as u8,
        (mask & 0xFF) as u8,
    )
}

/// Parses a hexadecimal mask token, with or without a `0x` prefix.
pub fn hex_to_mask(token: &str) -> Result<Ipv4Addr, MaskError> {
    let digits: &str = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MaskError::InvalidHex(token.to_string()));
    }

    u32::from_str_radix(digits, 16)
        .map(numeric_to_mask)
        .map_err(|_| MaskError::InvalidHex(token.to_string()))
}

/// Accepts either notation `ifconfig` uses across the BSD family.
pub fn parse_mask_token(token: &str) -> Result<Ipv4Addr, MaskError> {
    if token.contains('.') {
        token
            .parse::<Ipv4Addr>()
            .map_err(|_| MaskError::InvalidDotted(token.to_string()))
    } else {
        hex_to_mask(token)
    }
}

/// Prefix length of a contiguous mask, `None` for masks like `255.0.255.0`.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    ipnetwork::ipv4_mask_to_prefix(mask).ok()
}
