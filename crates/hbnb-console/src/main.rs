use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use hbnb_console::{repl, Backend, Console, ConsoleConfig, ReplOptions};
use hbnb_store::{FileStorage, InMemoryObjectStore, ObjectStore};
use hbnb_types::ClassRegistry;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.resolve_config()?;
    init_tracing(&config);

    let registry = ClassRegistry::standard();
    let options = ReplOptions {
        prompt: config.prompt.clone(),
        interactive: io::stdin().is_terminal(),
    };

    match config.backend {
        Backend::File => {
            let store = FileStorage::open(&config.storage_path, registry.clone())
                .with_context(|| {
                    format!("failed to load {}", config.storage_path.display())
                })?;
            tracing::info!(path = %config.storage_path.display(), "using file storage");
            session(Console::new(registry, store), &options)
        }
        Backend::Memory => {
            tracing::info!("using in-memory storage");
            session(Console::new(registry, InMemoryObjectStore::new()), &options)
        }
    }
}

fn session<S: ObjectStore>(mut console: Console<S>, options: &ReplOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut console, stdin.lock(), &mut stdout, options)?;
    Ok(())
}

/// Logs go to stderr so stdout carries command output only.
fn init_tracing(config: &ConsoleConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
