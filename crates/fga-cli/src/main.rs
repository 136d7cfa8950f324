//! fga CLI - Manage stores on an OpenFGA server.
//!
//! Every command prints a single line of canonical JSON to stdout, so output
//! can be piped straight into other tools. Diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fga_client::{ClientConfig, HttpClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use fga_format::MAX_STORES_PAGES_LENGTH;
use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_MAX_PAGES: NonZeroUsize = match NonZeroUsize::new(MAX_STORES_PAGES_LENGTH) {
    Some(pages) => pages,
    None => NonZeroUsize::MIN,
};

const DEFAULT_TIMEOUT_SECS: NonZeroU64 = match NonZeroU64::new(DEFAULT_TIMEOUT.as_secs()) {
    Some(secs) => secs,
    None => NonZeroU64::MIN,
};

#[derive(Parser)]
#[command(name = "fga")]
#[command(author, version, about = "Manage stores on an OpenFGA server", long_about = None)]
struct Cli {
    /// API root of the server
    #[arg(long, env = "FGA_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "FGA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: NonZeroU64,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and list stores
    Stores {
        #[command(subcommand)]
        command: StoresCommand,
    },
}

#[derive(Subcommand)]
enum StoresCommand {
    /// Create a store
    Create {
        /// Name of the new store
        name: String,
    },

    /// List stores
    List {
        /// Max number of pages to get
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: NonZeroUsize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ClientConfig::new(&cli.api_url)
        .context("failed to initialize FGA client")?
        .with_timeout(Duration::from_secs(cli.timeout.get()));
    let client = HttpClient::new(config).context("failed to initialize FGA client")?;

    match cli.command {
        Commands::Stores { command } => match command {
            StoresCommand::Create { name } => commands::stores::create::run(&client, &name),
            StoresCommand::List { max_pages } => commands::stores::list::run(&client, max_pages),
        },
    }
}
