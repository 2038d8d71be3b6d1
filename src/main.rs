use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rewrapped::{
    cli,
    config::{self, Config},
    error,
    types::{DEFAULT_LIMIT, ItemType, TimeRange, TopItemsQuery},
};

/// Diagnostics only; user-facing output goes through the status macros.
const DEFAULT_LOG_FILTER: &str = "rewrapped=warn";

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the interactive web page
    Serve(ServeOptions),

    /// Show your top tracks or artists
    Top(TopOptions),

    /// How niche is your music taste?
    Niche(NicheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the page in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// What to list: tracks or artists
    pub item_type: ItemType,

    /// Listening window: short-term, medium-term or long-term
    #[clap(long, default_value = "long-term")]
    pub time_range: TimeRange,

    /// Number of items (1-100)
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct NicheOptions {
    /// Listening window: short-term, medium-term or long-term
    #[clap(long, default_value = "long-term")]
    pub time_range: TimeRange,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!(
            "{}\nSet it in the environment or in {}",
            e,
            config::env_path().display()
        ),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(log_filter())
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(load_config(), opt.open).await,
        Command::Top(opt) => {
            let query = TopItemsQuery::new(opt.item_type, opt.time_range).with_limit(opt.limit);
            cli::top(&load_config(), query).await
        }
        Command::Niche(opt) => cli::niche(&load_config(), opt.time_range).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
