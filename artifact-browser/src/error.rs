use thiserror::Error;

/// Faults the browser does not handle itself. They end the invocation and
/// are reported by the caller.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("Azure DevOps request failed: {0}")]
    Source(#[from] az_devops::BuildClientError),
    #[error("selection prompt failed: {0}")]
    Prompt(String),
    #[error("build number {0:?} does not start with a build ID")]
    InvalidBuildNumber(String),
}

impl BrowseError {
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }
}
