use std::{fmt, path::PathBuf};

use config::{Config, ConfigError};

use crate::ports::SettingsSource;

pub const ORGANIZATION_URL_KEY: &str = "azureDevOps.organizationUrl";
pub const PERSONAL_ACCESS_TOKEN_KEY: &str = "azureDevOps.personalAccessToken";
pub const BUILDS_PROJECT_KEY: &str = "azureDevOps.buildsProject";

/// Project identifier the build list is fetched for when nothing else is set.
pub const DEFAULT_BUILDS_PROJECT: &str = "MyFirstProject";

pub const ORGANIZATION_URL_ENV: &str = "ADO_ORGANIZATION_URL";
pub const PERSONAL_ACCESS_TOKEN_ENV: &str = "ADO_TOKEN";
pub const BUILDS_PROJECT_ENV: &str = "ADO_BUILDS_PROJECT";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub organization_url: String,
    pub personal_access_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("organization_url", &self.organization_url)
            .field("personal_access_token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads both settings once. `None` if either is missing or blank.
    pub fn read<S: SettingsSource + ?Sized>(settings: &S) -> Option<Self> {
        let organization_url = non_empty_setting(settings, ORGANIZATION_URL_KEY);
        let personal_access_token = non_empty_setting(settings, PERSONAL_ACCESS_TOKEN_KEY);

        Some(Self {
            organization_url: organization_url?,
            personal_access_token: personal_access_token?,
        })
    }
}

fn non_empty_setting<S: SettingsSource + ?Sized>(settings: &S, key: &str) -> Option<String> {
    settings
        .get_setting(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub fn builds_project<S: SettingsSource + ?Sized>(settings: &S) -> String {
    non_empty_setting(settings, BUILDS_PROJECT_KEY)
        .unwrap_or_else(|| DEFAULT_BUILDS_PROJECT.to_owned())
}

impl SettingsSource for Config {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.get_string(key).ok()
    }
}

/// One layer of explicitly provided values, from the environment or the command line.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub organization_url: Option<String>,
    pub personal_access_token: Option<String>,
    pub builds_project: Option<String>,
}

impl SettingsOverrides {
    pub fn from_env() -> Self {
        Self {
            organization_url: std::env::var(ORGANIZATION_URL_ENV).ok(),
            personal_access_token: std::env::var(PERSONAL_ACCESS_TOKEN_ENV).ok(),
            builds_project: std::env::var(BUILDS_PROJECT_ENV).ok(),
        }
    }
}

impl fmt::Display for SettingsOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "organization_url={}, personal_access_token={}, builds_project={}",
            self.organization_url.is_some(),
            self.personal_access_token.is_some(),
            self.builds_project.is_some()
        )
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("artifact-browser").join("settings.toml"))
}

/// Layers the settings file, the environment, and the command line, later
/// layers winning.
pub fn read_settings(
    settings_path: Option<PathBuf>,
    cli: SettingsOverrides,
) -> Result<Config, ConfigError> {
    build_settings(
        settings_path.or_else(default_settings_path),
        [SettingsOverrides::from_env(), cli],
    )
}

fn build_settings(
    settings_path: Option<PathBuf>,
    layers: impl IntoIterator<Item = SettingsOverrides>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = settings_path {
        tracing::debug!(path = %path.display(), "Reading settings file");
        builder = builder.add_source(config::File::from(path).required(false));
    }

    for layer in layers {
        tracing::debug!(%layer, "Applying settings overrides");
        builder = builder
            .set_override_option(ORGANIZATION_URL_KEY, layer.organization_url)?
            .set_override_option(PERSONAL_ACCESS_TOKEN_KEY, layer.personal_access_token)?
            .set_override_option(BUILDS_PROJECT_KEY, layer.builds_project)?;
    }

    builder.build()
}
