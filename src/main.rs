mod commands;
mod host;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use party_core::{ApiConfig, App, HttpApi};
use tracing::Level;

use crate::host::TerminalHost;

#[derive(Parser)]
#[command(name = "party-planner")]
#[command(about = "Browse upcoming parties, see who RSVP'd, add and delete parties")]
struct Cli {
    /// Party service base URL (development override)
    #[arg(long, global = true, hide = true)]
    base_url: Option<String>,

    /// Cohort path segment (development override)
    #[arg(long, global = true, hide = true)]
    cohort: Option<String>,

    /// How to print the rendered view
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all parties, optionally with one selected
    Show {
        /// Party to show details for
        #[arg(short, long)]
        select: Option<i64>,
    },
    /// Add a new party
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        location: String,

        /// Party to keep selected while adding
        #[arg(short, long)]
        select: Option<i64>,
    },
    /// Delete a party by id
    Delete {
        id: i64,

        /// Party to select before deleting
        #[arg(short, long)]
        select: Option<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    /// Colored terminal output
    Text,
    /// The HTML fragment a browser would mount
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = api_config(cli.base_url.as_deref(), cli.cohort.as_deref())?;
    let app = App::new(HttpApi::new(config), TerminalHost::default());
    app.start().await;

    match cli.command {
        Commands::Show { select } => commands::show::run(&app, select).await?,
        Commands::Add {
            name,
            description,
            date,
            location,
            select,
        } => {
            let draft = commands::add::Draft {
                name,
                description,
                date,
                location,
            };
            commands::add::run(&app, draft, select).await?
        }
        Commands::Delete { id, select } => commands::delete::run(&app, id, select).await?,
    }

    commands::print(app.host(), cli.format)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Flags override the deployment defaults one piece at a time.
fn api_config(base_url: Option<&str>, cohort: Option<&str>) -> Result<ApiConfig> {
    if base_url.is_none() && cohort.is_none() {
        return Ok(ApiConfig::default());
    }

    let defaults = ApiConfig::default();
    let config = ApiConfig::new(
        base_url.unwrap_or(defaults.base_url()),
        cohort.unwrap_or(defaults.cohort()),
    )?;
    Ok(config)
}
