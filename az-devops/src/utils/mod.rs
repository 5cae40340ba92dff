use std::fmt;

use azure_devops_rust_api::Credential;
use url::Url;

use crate::BuildClientError;

pub fn credential_from_pat(pat: &str) -> Credential {
    tracing::debug!("Authenticate using personal access token");
    Credential::from_pat(pat.to_owned())
}

/// Organization name extracted from an Azure DevOps service URL.
///
/// Accepts both the current `https://dev.azure.com/{org}` form and the legacy
/// `https://{org}.visualstudio.com` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organization(String);

impl Organization {
    pub fn from_url(organization_url: &str) -> Result<Self, BuildClientError> {
        let invalid = || BuildClientError::InvalidOrganizationUrl(organization_url.to_owned());

        let url = Url::parse(organization_url.trim()).map_err(|_| invalid())?;
        let host = url.host_str().ok_or_else(invalid)?;

        let name = if host.eq_ignore_ascii_case("dev.azure.com") {
            url.path_segments()
                .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))
                .map(str::to_owned)
        } else {
            host.strip_suffix(".visualstudio.com")
                .filter(|org| !org.is_empty())
                .map(str::to_owned)
        };

        name.map(Self).ok_or_else(invalid)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
