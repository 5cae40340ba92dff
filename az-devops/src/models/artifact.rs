use azure_devops_rust_api::build::models::BuildArtifact as AzureBuildArtifact;
use serde::{Deserialize, Serialize};

use super::from_api_model;

/// Resource type the build service assigns to artifacts published by
/// multi-stage pipelines.
pub const PIPELINE_ARTIFACT_TYPE: &str = "PipelineArtifact";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildArtifact {
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    pub source: Option<String>,
    pub resource: Option<ArtifactResource>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactResource {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub data: Option<String>,
    pub download_url: Option<String>,
    pub url: Option<String>,
}

impl BuildArtifact {
    pub fn resource_type(&self) -> Option<&str> {
        self.resource
            .as_ref()
            .and_then(|resource| resource.resource_type.as_deref())
    }

    pub fn is_pipeline_artifact(&self) -> bool {
        self.resource_type() == Some(PIPELINE_ARTIFACT_TYPE)
    }
}

impl TryFrom<AzureBuildArtifact> for BuildArtifact {
    type Error = serde_json::Error;

    fn try_from(artifact: AzureBuildArtifact) -> Result<Self, Self::Error> {
        from_api_model(&artifact)
    }
}
