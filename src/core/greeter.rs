use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// The text every greeter hands out.
pub const GREETING: &str = "Hello World!";

/// Holds the fixed greeting for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeter {
    greeting: &'static str,
}

impl Greeter {
    pub fn new() -> Self {
        Self { greeting: GREETING }
    }

    /// Returns the greeting. Same value on every call.
    pub fn greeting(&self) -> &str {
        self.greeting
    }

    /// Writes the greeting and a line terminator to `out`, then flushes.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.greeting)?;
        out.flush()?;
        tracing::debug!("Wrote {} byte greeting", self.greeting.len() + 1);
        Ok(())
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.greeting)
    }
}
