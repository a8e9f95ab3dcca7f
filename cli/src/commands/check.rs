use std::io::{self, Write};

use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::print::{self, Printer};
use linkprobe_common::config::Config;
use linkprobe_common::network::interface::ActiveInterface;
use linkprobe_common::network::report::{CheckEvent, ConnectivityReport, Notice};
use linkprobe_core::check;
use linkprobe_core::platform::Platform;
use linkprobe_core::system::SystemCommandRunner;

const NO_INTERFACES: &str = "No active interfaces with an IP address detected.";

pub fn check(cfg: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), print::colors_wanted(cfg), cfg.quiet);

    printer.chatter("Starting Physical Layer Troubleshooting...");
    printer.chatter("");
    printer.chatter("Checking Physical Layer (Layer 1)...");

    let platform: Platform = Platform::detect();
    info!("Running on {platform}");

    let report: ConnectivityReport = check::perform_check(
        &platform,
        SystemCommandRunner,
        cfg.native,
        &mut |event| present_event(&mut printer, event),
    );

    present_outcome(&mut printer, &report);

    if cfg.summary {
        present_local_system(&mut printer);
        present_summary(&mut printer, &report);
    }

    printer.chatter("");
    printer.chatter("Physical Layer Troubleshooting Complete.");
    Ok(())
}

/// Streams one finding while the check is still running.
fn present_event<W: Write>(printer: &mut Printer<W>, event: CheckEvent<'_>) {
    match event {
        CheckEvent::InterfacesListed(_) => printer.chatter("Detected Network Interfaces:"),
        CheckEvent::InterfaceActive(iface) => {
            let line: String = interface_line(printer, iface);
            printer.println(&line);
        }
        CheckEvent::InterfaceSkipped { .. } => {}
        CheckEvent::GatewayLookup => {
            printer.chatter("");
            printer.chatter("Default Gateway:");
        }
        CheckEvent::Gateway(gateway) => {
            let line: String = format!(
                "Default Gateway: {}",
                printer.paint(gateway, colors::GATEWAY)
            );
            printer.println(&line);
        }
        CheckEvent::Notice(notice) => {
            let color: Color = match notice {
                Notice::UnsupportedPlatform(_) => colors::WARNING,
                Notice::ListingFailed(_) | Notice::Aborted(_) => colors::ERROR,
            };
            let line: String = printer.paint(&notice.to_string(), color);
            printer.println(&line);
        }
    }
}

fn interface_line<W: Write>(printer: &Printer<W>, iface: &ActiveInterface) -> String {
    format!(
        "Interface {} is active with IP address: {}, Subnet Mask: {}",
        printer.paint(&iface.name, colors::PRIMARY),
        printer.paint(&iface.ip_address.to_string(), colors::IPV4_ADDR),
        printer.paint(&iface.subnet_mask.to_string(), colors::IPV4_PREFIX),
    )
}

/// The unsupported platform notice already explains the empty report.
fn present_outcome<W: Write>(printer: &mut Printer<W>, report: &ConnectivityReport) {
    if !report.has_active_interfaces() && !report.is_unsupported() {
        let line: String = printer.paint(NO_INTERFACES, colors::WARNING);
        printer.println(&line);
    }
}

fn present_local_system<W: Write>(printer: &mut Printer<W>) {
    printer.chatter("");
    printer.header("local system");
    if let Ok(hostname) = sys_info::hostname() {
        printer.aligned_line("Hostname", &hostname);
    }
    if let Ok(os_type) = sys_info::os_type() {
        let release: String = sys_info::os_release().unwrap_or_default();
        printer.aligned_line("OS", format!("{os_type} {release}").trim_end());
    }
}

fn present_summary<W: Write>(printer: &mut Printer<W>, report: &ConnectivityReport) {
    printer.chatter("");
    printer.header("summary");

    for (idx, iface) in report.interfaces.iter().enumerate() {
        printer.tree_head(idx, &iface.name);
        let mut details: Vec<(&str, String)> = vec![
            ("IPv4", printer.paint(&iface.ip_address.to_string(), colors::IPV4_ADDR)),
            ("Mask", printer.paint(&iface.subnet_mask.to_string(), colors::IPV4_PREFIX)),
        ];
        if let Some(network) = iface.network() {
            details.push(("Network", printer.paint(&network.to_string(), colors::SECONDARY)));
        }
        printer.as_tree_one_level(&details);
    }

    let gateway: String = match &report.gateway {
        Some(gateway) => printer.paint(gateway, colors::GATEWAY),
        None => printer.paint("none", colors::WARNING),
    };
    printer.aligned_line("Gateway", &gateway);

    let count: usize = report.interfaces.len();
    let unit: &str = if count == 1 { "interface" } else { "interfaces" };
    let active: String = printer.paint(&format!("{count} active {unit}"), colors::ACCENT);
    let platform: String = printer.paint(&report.platform, colors::SECONDARY);
    printer.fat_separator();
    printer.centerln(&format!("Check Complete: {active} on {platform}"));
}
