//! Folio CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Folio content rendering CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rich-text document or CMS page to an HTML fragment
    Render {
        /// Input file ('-' or omitted for stdin)
        input: Option<String>,

        /// Write output to FILE instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Name of the page block to render (defaults to the first
        /// rich-text block)
        #[arg(long)]
        block: Option<String>,

        /// Hero image URL whose inline duplicate should be suppressed
        /// (defaults to the page's main image when rendering a page)
        #[arg(long)]
        hero_image: Option<String>,

        /// Emit the full render output (html, headings, drawer) as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            block,
            hero_image,
            json,
        } => commands::render::execute(commands::render::RenderArgs {
            input,
            output,
            block,
            hero_image,
            json,
        }),
    }
}
