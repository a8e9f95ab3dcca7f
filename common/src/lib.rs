//! # Linkprobe Common
//!
//! Shared vocabulary of the workspace: the models a physical layer check
//! produces, the mask arithmetic used to normalize what the platform commands
//! print, and the ports ([`system::NetworkProbe`], [`system::CommandRunner`])
//! that the core crate implements per platform.

pub mod config;
pub mod error;
pub mod network;
pub mod system;
