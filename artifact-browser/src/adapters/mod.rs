//! Concrete ports: Azure DevOps over HTTPS and a terminal user.

mod azure_devops;
mod error_display;
mod prompt;

pub use azure_devops::{AzureDevOpsConnector, AzureDevOpsSource};
pub use error_display::TerminalErrorDisplay;
pub use prompt::InquirePrompt;
