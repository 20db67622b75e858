use crate::prelude::*;
use clap::Parser;

mod atlassian;
mod config;
mod convert;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch a Jira issue and render its wiki markup description as Markdown"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Maximum characters kept from the rendered description; non-numeric or non-positive means unlimited
    #[clap(long, env = "JIRA_DESCRIPTION_CHARACTER_LIMIT", global = true)]
    limit: Option<String>,

    /// Text rendered when an issue has no description; an empty value renders nothing
    #[clap(long, env = "JIRA_MISSING_DESCRIPTION", global = true)]
    missing_description: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "JIRAMD_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Resolve the rendering settings once for the whole run
    pub fn render_config(&self) -> config::RenderConfig {
        config::RenderConfig::new(self.limit.as_deref(), self.missing_description.as_deref())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Jira issue operations
    #[clap(subcommand)]
    Issue(crate::atlassian::issue::Commands),

    /// Convert Jira wiki markup to Markdown offline
    Convert(crate::convert::App),

    /// Check Jira credentials
    Ping(crate::atlassian::ping::PingOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Issue(cmd) => crate::atlassian::issue::run(cmd, app.global).await,
        SubCommands::Convert(sub_app) => crate::convert::run(sub_app, app.global).await,
        SubCommands::Ping(options) => crate::atlassian::ping::handler(options).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
