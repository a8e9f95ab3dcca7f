use std::io::Write;

use colored::*;
use linkprobe_common::config::Config;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
const TREE_KEY_WIDTH: usize = 7;
const KEY_WIDTH: usize = 10;

/// Applies the process-wide color choice, which the log formatter shares.
pub fn initialize(cfg: &Config) {
    if !colors_wanted(cfg) {
        colored::control::set_override(false);
    }
}

pub fn colors_wanted(cfg: &Config) -> bool {
    !cfg.no_color && console::colors_enabled()
}

/// Line oriented writer for the report on standard output.
///
/// Write errors (a closed pipe, mostly) are dropped: the report is best effort
/// and the check itself has already happened.
pub struct Printer<W: Write> {
    out: W,
    color: bool,
    quiet: u8,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool, quiet: u8) -> Self {
        Self {
            out,
            color,
            quiet,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn println(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }

    /// A line that disappears in quiet mode.
    pub fn chatter(&mut self, msg: &str) {
        if !self.is_quiet() {
            self.println(msg);
        }
    }

    pub fn header(&mut self, msg: &str) {
        if self.is_quiet() {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
        let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: String = format!(
            "{}{}{}",
            self.paint(&"─".repeat(left), colors::SEPARATOR),
            self.paint(&formatted, colors::PRIMARY),
            self.paint(&"─".repeat(right), colors::SEPARATOR),
        );
        self.println(&line);
    }

    pub fn fat_separator(&mut self) {
        let sep: String = self.paint(&"═".repeat(TOTAL_WIDTH), colors::SEPARATOR);
        self.println(&sep);
    }

    pub fn aligned_line(&mut self, key: &str, value: &str) {
        let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
        let output: String = format!(
            "{} {}{}{} {}",
            self.paint(">", colors::SEPARATOR),
            self.paint(key, colors::PRIMARY),
            self.paint(&dots, colors::SEPARATOR),
            self.paint(":", colors::SEPARATOR),
            value
        );
        self.println(&output);
    }

    pub fn tree_head(&mut self, idx: usize, name: &str) {
        let output: String = format!(
            "{}{}{} {}",
            self.paint("[", colors::SEPARATOR),
            self.paint(&idx.to_string(), colors::ACCENT),
            self.paint("]", colors::SEPARATOR),
            self.paint(name, colors::PRIMARY)
        );
        self.println(&output);
    }

    pub fn as_tree_one_level(&mut self, key_value_pair: &[(&str, String)]) {
        for (i, (key, value)) in key_value_pair.iter().enumerate() {
            let last: bool = i + 1 == key_value_pair.len();
            let branch: &str = if last { "└─" } else { "├─" };
            let output: String = format!(
                " {} {}{}{} {}",
                self.paint(branch, colors::SEPARATOR),
                self.paint(key, colors::TEXT_DEFAULT),
                self.paint(
                    &".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len())),
                    colors::SEPARATOR
                ),
                self.paint(":", colors::SEPARATOR),
                value
            );
            self.println(&output);
        }
    }

    pub fn centerln(&mut self, msg: &str) {
        let space: String =
            " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
        self.println(&format!("{space}{msg}"));
    }
}
