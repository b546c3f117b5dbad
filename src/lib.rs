#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::greeter::{Greeter, GREETING};
pub use crate::utils::error::{GreeterError, Result};
