pub mod adapters;
mod browser;
pub mod cli;
mod error;
pub mod ports;
pub mod settings;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use browser::*;
pub use error::BrowseError;
