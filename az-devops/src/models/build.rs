use azure_devops_rust_api::build::models::Build as AzureBuild;
use serde::{Deserialize, Serialize};

use super::from_api_model;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: Option<i32>,
    #[serde(default)]
    pub build_number: String,
    pub project: Option<ProjectRef>,
}

/// The project a build belongs to, as embedded in build payloads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Build {
    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.name.as_deref())
    }

    /// Exact, case-sensitive match on the owning project's name.
    /// Builds without a project never belong to any project.
    pub fn belongs_to(&self, project_name: &str) -> bool {
        self.project_name() == Some(project_name)
    }
}

impl TryFrom<AzureBuild> for Build {
    type Error = serde_json::Error;

    fn try_from(build: AzureBuild) -> Result<Self, Self::Error> {
        from_api_model(&build)
    }
}
