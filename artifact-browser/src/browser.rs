use az_devops::{Build, BuildArtifact, Project};
use strum::Display;

use crate::{
    ports::{ErrorDisplay, SelectionPrompt, SettingsSource, SourceConnector},
    settings::{self, Credentials},
    BrowseError,
};

pub const MISSING_CONFIGURATION_MESSAGE: &str =
    "Azure DevOps organization URL and personal access token must be set in the extension settings.";
pub const NOT_A_PIPELINE_ARTIFACT_MESSAGE: &str =
    "The selected artifact is not a pipeline artifact.";

pub const SELECT_PROJECT_PLACEHOLDER: &str = "Select a project";
pub const SELECT_BUILD_PLACEHOLDER: &str = "Select a build";
pub const SELECT_ARTIFACT_PLACEHOLDER: &str = "Select an artifact";

/// Stages of one browse, in the only order they are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Step {
    AwaitingConfig,
    FetchingLists,
    SelectingProject,
    SelectingBuild,
    SelectingArtifact,
    Validating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtifactSelection {
    pub project: String,
    pub build_number: String,
    pub build_id: i32,
    pub artifact: BuildArtifact,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BrowseOutcome {
    /// The configuration error was shown; nothing was fetched.
    MissingConfiguration,
    /// The user dismissed the prompt of the given step.
    Cancelled(Step),
    /// The validation error was shown for the chosen artifact name.
    Rejected { artifact_name: String },
    Selected(ArtifactSelection),
}

/// Drives one project -> build -> artifact drill-down.
pub struct ArtifactBrowser<S, C, P, D> {
    settings: S,
    connector: C,
    prompt: P,
    display: D,
    builds_project: String,
}

impl<S, C, P, D> ArtifactBrowser<S, C, P, D>
where
    S: SettingsSource,
    C: SourceConnector,
    P: SelectionPrompt,
    D: ErrorDisplay,
{
    pub fn new(settings: S, connector: C, prompt: P, display: D) -> Self {
        let builds_project = settings::builds_project(&settings);

        Self {
            settings,
            connector,
            prompt,
            display,
            builds_project,
        }
    }

    /// Project identifier the build list is fetched for. The list is fetched
    /// before any project is chosen and filtered by the choice afterwards.
    pub fn builds_project(&self) -> &str {
        &self.builds_project
    }

    #[tracing::instrument(name = "browse", skip(self), fields(builds_project = %self.builds_project))]
    pub async fn run(&self) -> Result<BrowseOutcome, BrowseError> {
        enter(Step::AwaitingConfig);
        let Some(credentials) = Credentials::read(&self.settings) else {
            tracing::warn!("Organization URL or personal access token not set");
            self.display.show_error(MISSING_CONFIGURATION_MESSAGE);
            return Ok(BrowseOutcome::MissingConfiguration);
        };

        enter(Step::FetchingLists);
        let source = self.connector.connect(&credentials)?;
        let projects = source.list_projects().await?;
        let builds = source.list_builds(&self.builds_project).await?;
        tracing::debug!(
            projects = projects.len(),
            builds = builds.len(),
            "Fetched projects and builds"
        );

        enter(Step::SelectingProject);
        let Some(project_name) = self
            .prompt
            .choose(project_names(&projects), SELECT_PROJECT_PLACEHOLDER)
            .await?
        else {
            return Ok(cancelled(Step::SelectingProject));
        };

        enter(Step::SelectingBuild);
        let build_numbers = build_numbers(&builds_for_project(&builds, &project_name));
        tracing::debug!(project = %project_name, builds = build_numbers.len(), "Filtered builds");
        let Some(build_number) = self
            .prompt
            .choose(build_numbers, SELECT_BUILD_PLACEHOLDER)
            .await?
        else {
            return Ok(cancelled(Step::SelectingBuild));
        };

        enter(Step::SelectingArtifact);
        let build_id = parse_build_id(&build_number)
            .ok_or_else(|| BrowseError::InvalidBuildNumber(build_number.clone()))?;
        let artifacts = source.list_artifacts(&project_name, build_id).await?;
        let Some(artifact_name) = self
            .prompt
            .choose(artifact_names(&artifacts), SELECT_ARTIFACT_PLACEHOLDER)
            .await?
        else {
            return Ok(cancelled(Step::SelectingArtifact));
        };

        enter(Step::Validating);
        match artifacts
            .into_iter()
            .find(|artifact| artifact.name == artifact_name)
        {
            Some(artifact) if artifact.is_pipeline_artifact() => {
                Ok(BrowseOutcome::Selected(ArtifactSelection {
                    project: project_name,
                    build_number,
                    build_id,
                    artifact,
                }))
            }
            found => {
                tracing::warn!(
                    artifact = %artifact_name,
                    resource_type = ?found.as_ref().and_then(BuildArtifact::resource_type),
                    "Rejected artifact"
                );
                self.display.show_error(NOT_A_PIPELINE_ARTIFACT_MESSAGE);
                Ok(BrowseOutcome::Rejected { artifact_name })
            }
        }
    }
}

fn enter(step: Step) {
    tracing::debug!(%step, "Entering step");
}

fn cancelled(step: Step) -> BrowseOutcome {
    tracing::debug!(%step, "Selection dismissed");
    BrowseOutcome::Cancelled(step)
}

fn project_names(projects: &[Project]) -> Vec<String> {
    projects.iter().map(|project| project.name.clone()).collect()
}

/// Builds owned by the project named exactly `project_name`, in list order.
pub fn builds_for_project<'a>(builds: &'a [Build], project_name: &str) -> Vec<&'a Build> {
    builds
        .iter()
        .filter(|build| build.belongs_to(project_name))
        .collect()
}

fn build_numbers(builds: &[&Build]) -> Vec<String> {
    builds.iter().map(|build| build.build_number.clone()).collect()
}

fn artifact_names(artifacts: &[BuildArtifact]) -> Vec<String> {
    artifacts
        .iter()
        .map(|artifact| artifact.name.clone())
        .collect()
}

/// Reads the leading integer of a build number: optional whitespace, an
/// optional sign, then digits. Anything after the digits is ignored, so
/// `"20240611.3"` gives `20240611`.
pub fn parse_build_id(build_number: &str) -> Option<i32> {
    let trimmed = build_number.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value = rest[..digits_end].parse::<i32>().ok()?;
    Some(if negative { -value } else { value })
}
