use async_trait::async_trait;
use az_devops::{Build, BuildArtifact, BuildClient, Project};

use crate::{
    ports::{ArtifactSource, SourceConnector},
    settings::Credentials,
    BrowseError,
};

/// Connects to the organization named by the configured service URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct AzureDevOpsConnector;

impl SourceConnector for AzureDevOpsConnector {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn ArtifactSource>, BrowseError> {
        let client = BuildClient::new(
            &credentials.organization_url,
            &credentials.personal_access_token,
        )?;
        tracing::info!(organization = %client.organization(), "Connected to Azure DevOps");

        Ok(Box::new(AzureDevOpsSource::new(client)))
    }
}

/// Adapter that wraps an Azure DevOps `BuildClient` to implement the `ArtifactSource` port.
pub struct AzureDevOpsSource {
    client: BuildClient,
}

impl AzureDevOpsSource {
    pub fn new(client: BuildClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtifactSource for AzureDevOpsSource {
    async fn list_projects(&self) -> Result<Vec<Project>, BrowseError> {
        Ok(self.client.get_projects().await?)
    }

    async fn list_builds(&self, project: &str) -> Result<Vec<Build>, BrowseError> {
        Ok(self.client.get_builds(project).await?)
    }

    async fn list_artifacts(
        &self,
        project: &str,
        build_id: i32,
    ) -> Result<Vec<BuildArtifact>, BrowseError> {
        Ok(self.client.get_artifacts(project, build_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(url: &str) -> Credentials {
        Credentials {
            organization_url: url.to_owned(),
            personal_access_token: "secret".to_owned(),
        }
    }

    #[test]
    fn test_connect_with_dev_azure_url() {
        assert!(AzureDevOpsConnector
            .connect(&credentials("https://dev.azure.com/contoso"))
            .is_ok());
    }

    #[test]
    fn test_connect_rejects_unknown_host() {
        let result = AzureDevOpsConnector.connect(&credentials("https://example.com/contoso"));

        assert!(matches!(
            result,
            Err(BrowseError::Source(
                az_devops::BuildClientError::InvalidOrganizationUrl(_)
            ))
        ));
    }
}
