use clap::{Parser, Subcommand};
use ritualroom_core::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ritualroom", version, about = "Ritualroom CLI - daily ritual tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily rituals
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Daily journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Progress and streak statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Month overview
    Calendar {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a month as CSV
    Export {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
        /// Output file or directory (defaults to ./rituals-YYYY-MM.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Ritual template
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "failed to load config; using defaults");
    }

    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action, &config),
        Commands::Journal { action } => commands::journal::run(action, &config),
        Commands::Stats { action } => commands::stats::run(action, &config),
        Commands::Calendar { month, json } => commands::calendar::run(month, json, &config),
        Commands::Export { month, out } => commands::export::run(month, out, &config),
        Commands::Template { action } => commands::template::run(action, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
