use crate::config::CliConfig;
use crate::core::greeter::Greeter;
use crate::utils::error::Result;
use std::ffi::OsString;
use std::io::{self, Write};

/// Greets to `out`. Nothing in `config` changes what gets written.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", config.ignored.len());
    }

    let greeter = Greeter::new();
    greeter.write_to(out)?;
    tracing::info!("Greeting delivered");
    Ok(())
}

/// Program entry: parses and ignores `args`, prints the greeting to stdout.
pub fn main_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = CliConfig::from_args(args);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&config, &mut handle)
}
