//! Weeknight CLI Application
//!
//! Command-line client for the Weeknight cooking assistant.

mod args;
mod cli;
mod cook;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use weeknight_core::{
    api::{Backend, ClientBuilder},
    session::{bootstrap, IdentityStore},
};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_url,
        identity_file,
        no_color,
        command,
    } = Args::parse();

    let backend: Arc<dyn Backend> = Arc::new(
        ClientBuilder::new()
            .with_base_url(api_url)
            .build()
            .context("Failed to initialize API client")?,
    );
    let store = IdentityStore::new(identity_file).context("Failed to locate identity file")?;
    let identity = bootstrap(&store).await;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(backend, store, identity, renderer);

    info!("Weeknight started");

    match command {
        Login(args) => cli.login(args),
        Logout => cli.logout(),
        Whoami => cli.whoami(),
        Suggest(args) => cli.suggest(args).await,
        Search(args) => cli.search(args).await,
        Share(args) => cli.share(args).await,
        Cook(args) => cli.cook(args).await,
        Leftovers { command } => cli.handle_leftover_command(command).await,
        Grocery(args) => cli.grocery(args).await,
        Flags(args) => cli.flags(args).await,
    }
}
