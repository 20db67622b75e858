use std::io::Read;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::prelude::{print, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "convert")]
#[command(about = "Convert Jira wiki markup to Markdown without calling Jira")]
pub struct App {
    /// File containing wiki markup (reads stdin when omitted)
    path: Option<PathBuf>,
}

/// Read markup from a file or stdin
fn read_markup(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| f!("Failed to read markup from {}", path.display())),
        None => {
            let mut markup = String::new();
            std::io::stdin()
                .read_to_string(&mut markup)
                .context("Failed to read markup from stdin")?;
            Ok(markup)
        }
    }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running convert...");
    }

    let render = global.render_config();
    let markup = read_markup(app.path.as_ref())?;
    log::debug!("Read {} characters of markup", markup.chars().count());

    print!("{}", convert_markup(&markup, &render));

    Ok(())
}

/// Render markup the same way an issue description is rendered
pub fn convert_markup(markup: &str, render: &RenderConfig) -> String {
    render.render(Some(markup))
}
