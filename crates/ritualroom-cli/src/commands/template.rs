//! Ritual template commands for CLI.

use clap::Subcommand;
use ritualroom_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List the rituals being tracked
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TemplateAction, config: &Config) -> CliResult {
    let template = config.template()?;

    match action {
        TemplateAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(template.rituals())?);
            } else {
                for ritual in &template {
                    println!("{:<16} {:<9} {}", ritual.id, ritual.kind.as_str(), ritual.name);
                }
            }
        }
    }
    Ok(())
}
