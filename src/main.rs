//! SeoScribe HTTP Server
//!
//! SEO article drafting and audit service.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use seoscribe::generator::{GeneratorConfig, OpenAiGenerator};
use seoscribe::handlers::{api_router, status_router, AppState};
use seoscribe::pipeline::ArticlePipeline;
use seoscribe::scrape::LinkScraper;

/// SeoScribe HTTP Server
#[derive(Parser, Debug)]
#[command(name = "seoscribe")]
#[command(author = "SeoScribe Team <team@seoscribe.dev>")]
#[command(version)]
#[command(about = "SEO article drafting and audit service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GeneratorConfig::from_env().context("generator configuration")?;
    tracing::info!(model = %config.model, "generator client configured");

    let generator = Arc::new(OpenAiGenerator::new(config)?);
    let scraper = LinkScraper::new()?;
    let pipeline = ArticlePipeline::new(generator, scraper);
    let state = Arc::new(AppState::new(pipeline));

    let app = axum::Router::new()
        .merge(status_router(state.clone()))
        .merge(api_router(state.clone()))
        .layer(seoscribe::cors::cors_layer())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("SeoScribe server listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
