/// Runtime options of a single check.
///
/// Built once from the command line and handed down read-only.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reduce output (-q: drop section headers and banners).
    pub quiet: u8,
    /// Disables ANSI colors on standard output.
    pub no_color: bool,
    /// Print a tree summary of the report once the check is done.
    pub summary: bool,
    /// Enumerate interfaces through the OS interface table instead of
    /// parsing command output. The gateway still comes from the routing
    /// table command.
    pub native: bool,
    /// Log detail on stderr (-v: debug, -vv: trace).
    pub verbosity: u8,
}
