use std::path::PathBuf;

use clap::Parser;

use crate::settings::SettingsOverrides;

#[derive(Debug, Parser)]
#[command(name = "artifact-browser")]
#[command(about = "Pick a pipeline artifact from an Azure DevOps build")]
pub struct Cli {
    /// Settings file (TOML); defaults to the user config directory
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Azure DevOps organization URL, e.g. https://dev.azure.com/contoso
    #[arg(long)]
    pub organization_url: Option<String>,

    /// Personal access token with Build (read) scope
    #[arg(long)]
    pub token: Option<String>,

    /// Project whose builds are listed before a project is chosen
    #[arg(long)]
    pub builds_project: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            organization_url: self.organization_url.clone(),
            personal_access_token: self.token.clone(),
            builds_project: self.builds_project.clone(),
        }
    }
}
