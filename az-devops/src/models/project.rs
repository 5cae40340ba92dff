use azure_devops_rust_api::core::models::TeamProjectReference;
use serde::{Deserialize, Serialize};

use super::from_api_model;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<TeamProjectReference> for Project {
    type Error = serde_json::Error;

    fn try_from(project: TeamProjectReference) -> Result<Self, Self::Error> {
        from_api_model(&project)
    }
}
