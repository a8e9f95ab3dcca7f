use std::net::Ipv4Addr;

use linkprobe_common::network::interface::ActiveInterface;
use linkprobe_common::network::report::Notice;

use crate::support::{run_check, FakeRunner};

const NO_INTERFACES: &str = "No active interfaces with an IP address detected.";

/*************************************************************
                   Recorded iproute2 output
**************************************************************/

const BRIEF_ADDR: &str = "\
lo               UNKNOWN        127.0.0.1/8 ::1/128
enp9s0           UP             192.168.0.32/24 fe80::b3dd:5c39:7c29:48b6/64
wlan0            DOWN           192.168.1.42/24
tun0             UP             10.96.0.57/16
ipv6leakintrf0   UP             fdeb:446c:912d:8da::/64
";

const ADDR_SHOW_ENP9S0: &str = "\
2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether a8:a1:59:13:41:46 brd ff:ff:ff:ff:ff:ff
    inet 192.168.0.32/24 brd 192.168.0.255 scope global dynamic noprefixroute enp9s0
";

const ADDR_SHOW_TUN0: &str = "\
5: tun0: <POINTOPOINT,MULTICAST,NOARP,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UNKNOWN group default qlen 500
    link/none
    inet 10.96.0.57/16 scope global tun0
";

const ROUTE_SHOW: &str = "\
default via 10.0.0.1 dev enp9s0 proto dhcp src 192.168.0.32 metric 100
192.168.0.0/24 dev enp9s0 proto kernel scope link src 192.168.0.32 metric 100
";

fn healthy_linux() -> FakeRunner {
    FakeRunner::new()
        .answer("ip -brief addr", BRIEF_ADDR)
        .answer("ip addr show enp9s0", ADDR_SHOW_ENP9S0)
        .answer("ip addr show tun0", ADDR_SHOW_TUN0)
        .answer("ip route show", ROUTE_SHOW)
}

/*************************************************************
                          Tests
**************************************************************/

#[test]
fn reports_up_interfaces_with_ipv4_and_mask() {
    let (report, lines) = run_check("Linux", healthy_linux());

    assert_eq!(
        report.interfaces,
        vec![
            ActiveInterface::new(
                "enp9s0",
                Ipv4Addr::new(192, 168, 0, 32),
                Ipv4Addr::new(255, 255, 255, 0)
            ),
            ActiveInterface::new(
                "tun0",
                Ipv4Addr::new(10, 96, 0, 57),
                Ipv4Addr::new(255, 255, 0, 0)
            ),
        ]
    );
    assert_eq!(
        lines,
        [
            "Interface enp9s0 is active with IP address: 192.168.0.32, Subnet Mask: 255.255.255.0",
            "Interface tun0 is active with IP address: 10.96.0.57, Subnet Mask: 255.255.0.0",
            "Default Gateway: 10.0.0.1",
        ]
    );
    assert!(report.notices.is_empty());
}

#[test]
fn down_or_addressless_interfaces_are_never_reported() {
    let runner = healthy_linux();
    let calls = runner.calls();
    let (report, _) = run_check("Linux", runner);

    let names: Vec<&str> = report.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert!(!names.contains(&"lo"));
    assert!(!names.contains(&"wlan0"));
    assert!(!names.contains(&"ipv6leakintrf0"));

    let calls = calls.borrow();
    assert!(!calls.iter().any(|c| c == "ip addr show wlan0"));
    assert!(!calls.iter().any(|c| c == "ip addr show ipv6leakintrf0"));
}

#[test]
fn interface_without_mask_is_excluded() {
    let runner = FakeRunner::new()
        .answer("ip -brief addr", BRIEF_ADDR)
        .answer("ip addr show enp9s0", ADDR_SHOW_ENP9S0)
        .answer("ip addr show tun0", "5: tun0: <POINTOPOINT,UP> mtu 1500\n    link/none\n")
        .answer("ip route show", ROUTE_SHOW);

    let (report, _) = run_check("Linux", runner);

    assert_eq!(report.interfaces.len(), 1);
    assert_eq!(report.interfaces[0].name, "enp9s0");
}

#[test]
fn failing_mask_command_excludes_only_that_interface() {
    let runner = FakeRunner::new()
        .answer("ip -brief addr", BRIEF_ADDR)
        .answer("ip addr show tun0", ADDR_SHOW_TUN0)
        .answer("ip route show", ROUTE_SHOW);

    let (report, _) = run_check("Linux", runner);

    let names: Vec<&str> = report.interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["tun0"]);
    assert!(report.notices.is_empty());
}

#[test]
fn single_default_route_is_printed_once() {
    let (report, lines) = run_check("Linux", healthy_linux());

    let gateway_lines: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("Default Gateway:"))
        .collect();
    assert_eq!(gateway_lines, ["Default Gateway: 10.0.0.1"]);
    assert_eq!(report.gateway.as_deref(), Some("10.0.0.1"));
}

#[test]
fn missing_default_route_prints_nothing() {
    let runner = FakeRunner::new()
        .answer("ip -brief addr", BRIEF_ADDR)
        .answer("ip addr show enp9s0", ADDR_SHOW_ENP9S0)
        .answer("ip route show", "192.168.0.0/24 dev enp9s0 proto kernel scope link\n");

    let (report, lines) = run_check("Linux", runner);

    assert_eq!(report.gateway, None);
    assert!(!lines.iter().any(|l| l.starts_with("Default Gateway:")));
    assert!(report.notices.is_empty());
}

#[test]
fn all_commands_failing_still_completes() {
    let (report, lines) = run_check("Linux", FakeRunner::new());

    assert!(!report.has_active_interfaces());
    assert_eq!(report.gateway, None);
    assert!(matches!(report.notices.as_slice(), [Notice::ListingFailed(_)]));
    assert_eq!(lines.last().map(String::as_str), Some(NO_INTERFACES));
    assert!(lines[0].starts_with("Error checking interfaces: "));
}

#[test]
fn listing_failure_still_reports_gateway() {
    let runner = FakeRunner::new().answer("ip route show", ROUTE_SHOW);

    let (report, lines) = run_check("Linux", runner);

    assert_eq!(report.gateway.as_deref(), Some("10.0.0.1"));
    assert!(lines.contains(&"Default Gateway: 10.0.0.1".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(NO_INTERFACES));
}

#[test]
fn unsupported_os_yields_empty_report_and_notice() {
    for os in ["Windows", "SunOS", "unknown", ""] {
        let runner = healthy_linux();
        let calls = runner.calls();
        let (report, lines) = run_check(os, runner);

        assert!(!report.has_active_interfaces(), "{os}");
        assert_eq!(
            report.notices,
            [Notice::UnsupportedPlatform(os.to_string())],
            "{os}"
        );
        assert_eq!(lines, ["Physical layer check is not supported on this OS."]);
        assert!(calls.borrow().is_empty(), "no command may run on {os}");
    }
}

#[test]
fn point_to_point_default_route_reports_device() {
    let runner = healthy_linux().answer("ip route show", "default dev ppp0 scope link\n");

    let (report, lines) = run_check("Linux", runner);

    assert!(!report.was_aborted());
    assert_eq!(report.gateway.as_deref(), Some("ppp0"));
    assert!(lines.contains(&"Default Gateway: ppp0".to_string()));
    assert_eq!(report.interfaces.len(), 2);
}

#[test]
fn garbled_default_route_aborts_with_message() {
    let runner = FakeRunner::new()
        .answer("ip -brief addr", BRIEF_ADDR)
        .answer("ip addr show enp9s0", ADDR_SHOW_ENP9S0)
        .answer("ip route show", "default\n");

    let (report, lines) = run_check("Linux", runner);

    assert!(report.was_aborted());
    assert_eq!(report.interfaces.len(), 1);
    assert!(lines
        .iter()
        .any(|l| l.starts_with("An unexpected error occurred: ")));
}
