mod config;
mod observability;

use clap::Parser;
use config::Config;
use loader::{Genre, LoaderConf};
use router_config::chain::InMemoryRouterChain;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Resolves router configuration sources")]
enum CliCommand {
    /// Load the application config and hand the router section to the chain
    Run {
        #[arg(long, short)]
        config: PathBuf,
    },
    /// Re-emit a configuration source in another format
    Convert {
        path: PathBuf,
        #[arg(long, default_value = loader::DEFAULT_GENRE)]
        genre: String,
        #[arg(long, default_value = loader::DEFAULT_DELIM)]
        delim: String,
        /// Output format, defaults to the source format
        #[arg(long)]
        to: Option<String>,
        /// Only emit the subtree at this key path
        #[arg(long)]
        key: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = CliCommand::parse();

    match cli {
        CliCommand::Run { config } => run(config),
        CliCommand::Convert {
            path,
            genre,
            delim,
            to,
            key,
        } => convert(path, genre, delim, to, key),
    }
}

fn run(path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut config = Config::from_file(&path)?;
    let _guard = observability::init(config.logging.as_ref(), config.metrics.as_ref())?;

    tracing::info!(path = ?path, "Starting router configuration bootstrap");

    let chain = InMemoryRouterChain::new();
    router_config::init_router_config(config.router.as_mut(), &chain)?;

    match chain.config_bytes() {
        Some(bytes) => println!(
            "Delivered router configuration: virtual_service={} bytes, destination_rule={} bytes",
            bytes.virtual_service.len(),
            bytes.destination_rule.len()
        ),
        None => println!("No router section configured"),
    }
    Ok(())
}

fn convert(
    path: PathBuf,
    genre: String,
    delim: String,
    to: Option<String>,
    key: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let _guard = observability::init(None, None)?;

    let target: Genre = to.as_deref().unwrap_or(&genre).parse()?;
    let mut store = LoaderConf::new()
        .with_path(path)
        .with_genre(genre)
        .with_delim(delim)
        .load()?;
    if let Some(key) = key {
        store = store.cut(&key);
    }

    let bytes = store.marshal(target)?;
    std::io::stdout().write_all(&bytes)?;
    Ok(())
}
