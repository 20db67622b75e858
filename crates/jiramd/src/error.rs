#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Jira issue not found: {0}")]
    IssueNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from Jira: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
