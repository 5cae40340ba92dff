//! Capabilities the browser needs from its host.
//!
//! Each one is injected into [`ArtifactBrowser`](crate::ArtifactBrowser);
//! concrete implementations live in [`adapters`](crate::adapters).

use async_trait::async_trait;
use az_devops::{Build, BuildArtifact, Project};

use crate::{settings::Credentials, BrowseError};

/// String-valued settings, looked up by dotted key.
pub trait SettingsSource: Send + Sync {
    fn get_setting(&self, key: &str) -> Option<String>;
}

/// Read-only view of one organization's projects, builds, and artifacts.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, BrowseError>;

    /// `project` is a project name or ID.
    async fn list_builds(&self, project: &str) -> Result<Vec<Build>, BrowseError>;

    async fn list_artifacts(
        &self,
        project: &str,
        build_id: i32,
    ) -> Result<Vec<BuildArtifact>, BrowseError>;
}

/// Creates an [`ArtifactSource`] authenticated with the given credentials.
pub trait SourceConnector: Send + Sync {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn ArtifactSource>, BrowseError>;
}

#[async_trait]
pub trait SelectionPrompt: Send + Sync {
    /// Returns `None` when the user dismisses the prompt.
    async fn choose(
        &self,
        options: Vec<String>,
        placeholder: &str,
    ) -> Result<Option<String>, BrowseError>;
}

pub trait ErrorDisplay: Send + Sync {
    fn show_error(&self, message: &str);
}
