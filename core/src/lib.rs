//! # Linkprobe Core
//!
//! Runs the physical layer check: picks a [`probe`] for the running platform,
//! walks the interface listing, resolves masks and looks up the default
//! gateway. See [`check::perform_check`].

pub mod check;
pub mod platform;
pub mod probe;
pub mod system;
