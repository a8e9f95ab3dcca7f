use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use linkprobe_common::error::ProbeError;
use linkprobe_common::network::report::{CheckEvent, ConnectivityReport};
use linkprobe_common::system::{self, CommandRunner};
use linkprobe_core::check;
use linkprobe_core::platform::Platform;

/// Replays recorded command output. Unknown commands fail with exit status 1.
#[derive(Clone, Default)]
pub struct FakeRunner {
    outputs: HashMap<String, String>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    /// Shared log of every command line the runner was asked to execute.
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        self.calls.clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProbeError> {
        let command: String = system::command_line(program, args);
        self.calls.borrow_mut().push(command.clone());
        match self.outputs.get(&command) {
            Some(output) => Ok(output.clone()),
            None => Err(ProbeError::CommandFailed {
                command,
                status: "exit status: 1".into(),
            }),
        }
    }
}

/// Runs a check and renders every event the way the CLI streams it.
pub fn run_check(os_type: &str, runner: FakeRunner) -> (ConnectivityReport, Vec<String>) {
    let platform = Platform::from_os_type(os_type);
    let mut lines: Vec<String> = Vec::new();

    let report = check::perform_check(&platform, runner, false, &mut |event| {
        if let Some(line) = render(event) {
            lines.push(line);
        }
    });

    if !report.has_active_interfaces() && !report.is_unsupported() {
        lines.push("No active interfaces with an IP address detected.".to_string());
    }
    (report, lines)
}

fn render(event: CheckEvent<'_>) -> Option<String> {
    match event {
        CheckEvent::InterfaceActive(iface) => Some(iface.to_string()),
        CheckEvent::Gateway(gateway) => Some(format!("Default Gateway: {gateway}")),
        CheckEvent::Notice(notice) => Some(notice.to_string()),
        _ => None,
    }
}
