use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_settings, PokemonListController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

use render::render_listing;

#[derive(Parser, Debug)]
#[command(about = "Browse and search Pokémon from the command line")]
struct Args {
    /// Overrides the configured creature API base url.
    #[arg(long)]
    api_base_url: Option<String>,
    /// Overrides the configured default listing size.
    #[arg(long)]
    page_size: Option<u32>,
    /// Looks this creature up after the default listing loads.
    #[arg(long, conflicts_with = "interactive")]
    search: Option<String>,
    /// Reads one search term per line from stdin.
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_base_url) = args.api_base_url {
        settings = settings.with_api_base_url(api_base_url);
    }
    if let Some(page_size) = args.page_size {
        settings = settings.with_page_size(page_size);
    }
    info!(
        api_base_url = %settings.api_base_url,
        page_size = settings.page_size,
        "starting pokedex"
    );

    let controller =
        PokemonListController::from_settings(&settings).context("failed to build controller")?;

    if args.interactive {
        return run_interactive(controller).await;
    }

    controller.initialize().await;
    if let Some(term) = args.search {
        controller.search(&term).await;
    }
    println!("{}", render_listing(&controller.state()));

    Ok(())
}

async fn run_interactive(controller: PokemonListController) -> Result<()> {
    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let frame = render_listing(&updates.borrow_and_update());
            println!("{frame}");
        }
    });

    controller.initialize().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read search term from stdin")?
    {
        controller.search(&line).await;
    }

    drop(controller);
    renderer.await.context("render task failed")?;
    Ok(())
}
