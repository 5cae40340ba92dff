//! In-memory substitutes for the browser's ports.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use az_devops::{ArtifactResource, Build, BuildArtifact, Project, ProjectRef};

use crate::{
    ports::{ArtifactSource, ErrorDisplay, SelectionPrompt, SettingsSource, SourceConnector},
    settings::{Credentials, ORGANIZATION_URL_KEY, PERSONAL_ACCESS_TOKEN_KEY},
    BrowseError,
};

pub fn project(name: &str) -> Project {
    Project {
        id: None,
        name: name.to_owned(),
        description: None,
    }
}

pub fn build(number: &str, project: Option<&str>) -> Build {
    Build {
        id: None,
        build_number: number.to_owned(),
        project: project.map(|name| ProjectRef {
            id: None,
            name: Some(name.to_owned()),
        }),
    }
}

pub fn artifact(name: &str, resource_type: Option<&str>) -> BuildArtifact {
    BuildArtifact {
        id: None,
        name: name.to_owned(),
        source: None,
        resource: resource_type.map(|resource_type| ArtifactResource {
            resource_type: Some(resource_type.to_owned()),
            data: None,
            download_url: None,
            url: None,
        }),
    }
}

#[derive(Clone, Default)]
pub struct FakeSettings(HashMap<String, String>);

impl FakeSettings {
    pub fn with_credentials(url: &str, token: &str) -> Self {
        Self::default()
            .with(ORGANIZATION_URL_KEY, url)
            .with(PERSONAL_ACCESS_TOKEN_KEY, token)
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl SettingsSource for FakeSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceCall {
    Connect(Credentials),
    ListProjects,
    ListBuilds(String),
    ListArtifacts(String, i32),
}

/// Serves canned lists and records every call, connections included.
#[derive(Clone, Default)]
pub struct FakeSource {
    projects: Vec<Project>,
    builds: Vec<Build>,
    artifacts: Vec<BuildArtifact>,
    fail_projects: bool,
    calls: Arc<Mutex<Vec<SourceCall>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_builds(mut self, builds: Vec<Build>) -> Self {
        self.builds = builds;
        self
    }

    pub fn with_artifacts(mut self, artifacts: Vec<BuildArtifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn failing_projects(mut self) -> Self {
        self.fail_projects = true;
        self
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SourceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ArtifactSource for FakeSource {
    async fn list_projects(&self) -> Result<Vec<Project>, BrowseError> {
        self.record(SourceCall::ListProjects);
        if self.fail_projects {
            return Err(BrowseError::Source(
                az_devops::BuildClientError::InvalidOrganizationUrl("unreachable".to_owned()),
            ));
        }
        Ok(self.projects.clone())
    }

    async fn list_builds(&self, project: &str) -> Result<Vec<Build>, BrowseError> {
        self.record(SourceCall::ListBuilds(project.to_owned()));
        Ok(self.builds.clone())
    }

    async fn list_artifacts(
        &self,
        project: &str,
        build_id: i32,
    ) -> Result<Vec<BuildArtifact>, BrowseError> {
        self.record(SourceCall::ListArtifacts(project.to_owned(), build_id));
        Ok(self.artifacts.clone())
    }
}

impl SourceConnector for FakeSource {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn ArtifactSource>, BrowseError> {
        self.record(SourceCall::Connect(credentials.clone()));
        Ok(Box::new(self.clone()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromptCall {
    pub options: Vec<String>,
    pub placeholder: String,
}

/// Answers prompts from a script. Running out of answers counts as a cancel.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<Option<String>>>>,
    calls: Arc<Mutex<Vec<PromptCall>>>,
}

impl ScriptedPrompt {
    pub fn answering<'a>(answers: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(
                answers
                    .into_iter()
                    .map(|answer| answer.map(str::to_owned))
                    .collect(),
            )),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<PromptCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SelectionPrompt for ScriptedPrompt {
    async fn choose(
        &self,
        options: Vec<String>,
        placeholder: &str,
    ) -> Result<Option<String>, BrowseError> {
        self.calls.lock().unwrap().push(PromptCall {
            options,
            placeholder: placeholder.to_owned(),
        });
        Ok(self.answers.lock().unwrap().pop_front().flatten())
    }
}

#[derive(Clone, Default)]
pub struct RecordingDisplay {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingDisplay {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorDisplay for RecordingDisplay {
    fn show_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}
