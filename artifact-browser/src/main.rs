use anyhow::Context;
use artifact_browser::{
    adapters::{AzureDevOpsConnector, InquirePrompt, TerminalErrorDisplay},
    cli::Cli,
    settings, telemetry, ArtifactBrowser, BrowseOutcome,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();

    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let settings = settings::read_settings(cli.settings.clone(), cli.overrides())
        .context("Failed to read settings")?;

    let browser = ArtifactBrowser::new(
        settings,
        AzureDevOpsConnector,
        InquirePrompt::default(),
        TerminalErrorDisplay,
    );

    let outcome = browser
        .run()
        .await
        .context("Failed to browse pipeline artifacts")?;

    if let BrowseOutcome::Selected(selection) = outcome {
        tracing::info!(
            project = %selection.project,
            build = %selection.build_number,
            artifact = %selection.artifact.name,
            "Selected pipeline artifact"
        );
    }

    Ok(())
}
