#[cfg(feature = "cli")]
pub mod app;
pub mod greeter;

pub use crate::utils::error::Result;
