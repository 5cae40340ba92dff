use azure_devops_rust_api::{build, core};
use thiserror::Error;

use crate::{
    models::{Build, BuildArtifact, Project},
    utils::{credential_from_pat, Organization},
};

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("invalid Azure DevOps organization URL: {0}")]
    InvalidOrganizationUrl(String),
    #[error(transparent)]
    Azure(#[from] typespec::Error),
    #[error("unexpected response payload: {0}")]
    UnexpectedPayload(#[from] serde_json::Error),
}

/// Read-only access to the projects, builds, and build artifacts of one
/// Azure DevOps organization.
pub struct BuildClient {
    core_client: core::Client,
    build_client: build::Client,
    organization: Organization,
}

impl BuildClient {
    pub fn new(organization_url: &str, pat: &str) -> Result<Self, BuildClientError> {
        let organization = Organization::from_url(organization_url)?;

        let core_client = core::ClientBuilder::new(credential_from_pat(pat)).build();
        let build_client = build::ClientBuilder::new(credential_from_pat(pat)).build();

        Ok(Self {
            core_client,
            build_client,
            organization,
        })
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>, BuildClientError> {
        let projects = self
            .core_client
            .projects_client()
            .list(self.organization.as_str())
            .await?
            .value;

        tracing::debug!(count = projects.len(), "Fetched projects");

        projects
            .into_iter()
            .map(|project| Project::try_from(project).map_err(BuildClientError::from))
            .collect()
    }

    /// `project` is a project name or ID.
    pub async fn get_builds(&self, project: &str) -> Result<Vec<Build>, BuildClientError> {
        let builds = self
            .build_client
            .builds_client()
            .list(self.organization.as_str(), project)
            .await?
            .value;

        tracing::debug!(count = builds.len(), project, "Fetched builds");

        builds
            .into_iter()
            .map(|build| Build::try_from(build).map_err(BuildClientError::from))
            .collect()
    }

    pub async fn get_artifacts(
        &self,
        project: &str,
        build_id: i32,
    ) -> Result<Vec<BuildArtifact>, BuildClientError> {
        let artifacts = self
            .build_client
            .artifacts_client()
            .list(self.organization.as_str(), project, build_id)
            .await?
            .value;

        tracing::debug!(count = artifacts.len(), project, build_id, "Fetched artifacts");

        artifacts
            .into_iter()
            .map(|artifact| BuildArtifact::try_from(artifact).map_err(BuildClientError::from))
            .collect()
    }
}
