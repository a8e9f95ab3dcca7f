//! # Physical Layer Check
//!
//! Strictly sequential: list interfaces, resolve the mask of every qualifying
//! one, then look up the default gateway.
//!
//! Failures never escape. A command that cannot run only removes the data of
//! its own step. Output that cannot be parsed ends the check early with an
//! [`Notice::Aborted`]. Either way the caller gets a [`ConnectivityReport`].

use std::net::Ipv4Addr;

use tracing::{debug, error, info, warn};

use linkprobe_common::error::ProbeError;
use linkprobe_common::network::interface::{ActiveInterface, InterfaceCandidate, SkipReason};
use linkprobe_common::network::report::{CheckEvent, ConnectivityReport, Notice};
use linkprobe_common::system::{CommandRunner, NetworkProbe};

use crate::platform::Platform;
use crate::probe;

/// Receives [`CheckEvent`]s as soon as they happen.
pub type EventSink<'a> = dyn for<'e> FnMut(CheckEvent<'e>) + 'a;

/// Selects the probe for `platform` and runs the full check.
pub fn perform_check<R>(
    platform: &Platform,
    runner: R,
    native: bool,
    on_event: &mut EventSink<'_>,
) -> ConnectivityReport
where
    R: CommandRunner + 'static,
{
    let probe: Result<Box<dyn NetworkProbe>, ProbeError> = if native {
        Ok(probe::select_native_probe(platform, runner))
    } else {
        probe::select_probe(platform, runner)
    };

    match probe {
        Ok(probe) => CheckService::new(probe).run(platform.name(), on_event),
        Err(e) => {
            warn!("{e}");
            let mut report = ConnectivityReport::new(platform.name());
            let notice = Notice::UnsupportedPlatform(platform.name().to_string());
            push_notice(&mut report, notice, on_event);
            report
        }
    }
}

/// Drives a [`NetworkProbe`] through one check.
pub struct CheckService {
    probe: Box<dyn NetworkProbe>,
}

impl CheckService {
    pub fn new(probe: Box<dyn NetworkProbe>) -> Self {
        Self { probe }
    }

    pub fn run(&self, platform: &str, on_event: &mut EventSink<'_>) -> ConnectivityReport {
        let mut report = ConnectivityReport::new(platform);

        if let Err(e) = self.collect(&mut report, on_event) {
            error!("Check aborted: {e}");
            push_notice(&mut report, Notice::Aborted(e.to_string()), on_event);
        }

        info!(
            "Check finished with {} active interface(s)",
            report.interfaces.len()
        );
        report
    }

    fn collect(
        &self,
        report: &mut ConnectivityReport,
        on_event: &mut EventSink<'_>,
    ) -> Result<(), ProbeError> {
        for candidate in self.enumerate(report, on_event)? {
            if let Some(iface) = self.resolve(&candidate, on_event)? {
                on_event(CheckEvent::InterfaceActive(&iface));
                report.interfaces.push(iface);
            }
        }

        on_event(CheckEvent::GatewayLookup);
        if let Some(gateway) = self.gateway()? {
            on_event(CheckEvent::Gateway(&gateway));
            report.gateway = Some(gateway);
        }
        Ok(())
    }

    /// A failing listing command leaves the interface list empty.
    fn enumerate(
        &self,
        report: &mut ConnectivityReport,
        on_event: &mut EventSink<'_>,
    ) -> Result<Vec<InterfaceCandidate>, ProbeError> {
        match self.probe.list_interfaces() {
            Ok(candidates) => {
                debug!("Listing returned {} interface(s)", candidates.len());
                on_event(CheckEvent::InterfacesListed(candidates.len()));
                Ok(candidates)
            }
            Err(e) if e.is_command_failure() => {
                warn!("Interface listing failed: {e}");
                push_notice(report, Notice::ListingFailed(e.to_string()), on_event);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn resolve(
        &self,
        candidate: &InterfaceCandidate,
        on_event: &mut EventSink<'_>,
    ) -> Result<Option<ActiveInterface>, ProbeError> {
        let ip_address: Ipv4Addr = match candidate.check_viability() {
            Ok(ip_address) => ip_address,
            Err(reason) => {
                skip(&candidate.name, reason, on_event);
                return Ok(None);
            }
        };

        let subnet_mask: Option<Ipv4Addr> = match self.probe.subnet_mask(&candidate.name) {
            Ok(mask) => mask,
            Err(e) if e.is_command_failure() => {
                debug!("Mask lookup for {} failed: {e}", candidate.name);
                None
            }
            Err(e) => return Err(e),
        };

        match subnet_mask {
            Some(subnet_mask) => Ok(Some(ActiveInterface::new(
                candidate.name.clone(),
                ip_address,
                subnet_mask,
            ))),
            None => {
                skip(&candidate.name, SkipReason::NoSubnetMask, on_event);
                Ok(None)
            }
        }
    }

    /// A failing routing table command means "no gateway", not an error.
    fn gateway(&self) -> Result<Option<String>, ProbeError> {
        match self.probe.default_gateway() {
            Ok(None) => {
                debug!("Routing table has no default route");
                Ok(None)
            }
            Ok(gateway) => Ok(gateway),
            Err(e) if e.is_command_failure() => {
                debug!("Routing table lookup failed: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn skip(name: &str, reason: SkipReason, on_event: &mut EventSink<'_>) {
    debug!("Skipping {name}: {reason}");
    on_event(CheckEvent::InterfaceSkipped { name, reason });
}

fn push_notice(report: &mut ConnectivityReport, notice: Notice, on_event: &mut EventSink<'_>) {
    on_event(CheckEvent::Notice(&notice));
    report.notices.push(notice);
}
