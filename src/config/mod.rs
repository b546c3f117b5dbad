use clap::Parser;
use std::ffi::OsString;

/// Command line for `hello-greeter`.
///
/// Help and version flags are disabled and a hidden catch-all soaks up
/// everything else, so no argument list is ever rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "hello-greeter")]
#[command(about = "Prints a friendly greeting")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit stderr logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl CliConfig {
    /// Parses `args` (program name first, as `std::env::args_os` yields them).
    /// Anything clap refuses falls back to the defaults.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Ignoring unparsable arguments: {:?}", e.kind());
                Self::default()
            }
        }
    }
}
