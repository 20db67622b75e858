use colored::Colorize;
use jiramd_core::atlassian::jira::{
    issue_api_url, transform_issue_response, IssueOutput, JiraIssueResponse,
};
use serde::{Deserialize, Serialize};

use crate::atlassian::create_jira_client;
use crate::config::{JiraConfig, RenderConfig};
use crate::prelude::{eprintln, println, *};

/// Jira issue commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch an issue and render its description as Markdown
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for getting a Jira issue
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct GetOptions {
    /// Issue key (e.g., "PROJ-123")
    #[clap(env = "JIRA_ISSUE_KEY")]
    pub issue_key: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "description_only")]
    pub json: bool,

    /// Print only the rendered Markdown description
    #[arg(long)]
    pub description_only: bool,

    /// Exit with an error when the issue does not exist
    #[arg(long)]
    pub fail_when_not_found: bool,
}

/// Fetch an issue and render it
///
/// Returns `Ok(None)` for a missing issue unless `fail_when_not_found` is set.
pub async fn get_issue_data(
    config: &JiraConfig,
    render: &RenderConfig,
    issue_key: &str,
) -> Result<Option<IssueOutput>> {
    let client = create_jira_client(config)?;
    let url = issue_api_url(&config.base_url, &urlencoding::encode(issue_key));
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        if config.fail_when_not_found {
            return Err(Error::IssueNotFound(issue_key.to_string()).into());
        }
        log::warn!("Jira issue {issue_key} not found, skipping");
        return Ok(None);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(eyre!("Failed to fetch Jira issue [{}]: {}", status, body));
    }

    let issue = response
        .json::<JiraIssueResponse>()
        .await
        .map_err(|e| Error::InvalidResponse(e.to_string()))?;

    log::debug!(
        "Converting description with rules: {}",
        render.converter.pipeline().names().join(", ")
    );

    Ok(Some(transform_issue_response(
        issue,
        &config.base_url,
        &render.converter,
        render.limit,
    )))
}

/// Handle the get command
pub async fn handler(options: GetOptions, render: RenderConfig) -> Result<()> {
    let config = JiraConfig::from_env()?.with_overrides(options.fail_when_not_found);

    let Some(issue) = get_issue_data(&config, &render, &options.issue_key).await? else {
        eprintln!("Jira issue {} not found", options.issue_key);
        return Ok(());
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else if options.description_only {
        println!("{}", issue.description);
    } else {
        display_issue(&issue);
    }

    Ok(())
}

/// Run issue commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running issue command...");
    }

    let render = global.render_config();

    match cmd {
        Commands::Get(options) => handler(options, render).await,
    }
}

/// Display an issue as a formatted CLI table followed by its description
fn display_issue(issue: &IssueOutput) {
    std::println!(
        "\n{} - {}\n",
        issue.key.bold().cyan(),
        issue.summary.bright_white()
    );

    let mut table = new_table();

    if let Some(issue_type) = &issue.issue_type {
        table.add_row(prettytable::row![
            "Type".bold().cyan(),
            issue_type.bright_blue().to_string()
        ]);
    }

    if let Some(icon) = &issue.issue_type_icon {
        table.add_row(prettytable::row![
            "Icon".bold().cyan(),
            icon.bright_black().to_string()
        ]);
    }

    table.add_row(prettytable::row![
        "URL".bold().cyan(),
        issue.url.underline().to_string()
    ]);

    table.printstd();

    std::println!("\n{}:", "Description".bold().cyan());
    std::println!("{}\n", issue.description);
}
