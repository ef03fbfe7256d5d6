// Copyright 2026 Cashmap Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use cashmap::config::Config;
use cashmap::renderer::chromium::ChromiumRenderer;
use cashmap::renderer::Renderer;
use cashmap::rest::{self, AppState};

#[derive(Parser)]
#[command(
    name = "cashmap",
    about = "Cashmap: cash currency-exchange branch rates over HTTP",
    version
)]
struct Cli {
    /// Port for the HTTP API
    #[arg(long, default_value_t = 8080, env = "CASHMAP_PORT")]
    port: u16,

    /// Enable debug logging
    #[arg(long, env = "DEBUG")]
    dbg: bool,

    /// Max branch cards parsed concurrently
    #[arg(long, default_value_t = 3)]
    concurrency: usize,

    /// Chromium binary to use instead of auto-discovery
    #[arg(long, env = "CASHMAP_CHROMIUM_PATH")]
    chromium: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.dbg {
        "cashmap=debug"
    } else {
        "cashmap=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    info!("starting cashmap v{}", env!("CARGO_PKG_VERSION"));

    let config = Config {
        port: cli.port,
        concurrency: cli.concurrency.max(1),
        debug: cli.dbg,
        chromium_path: cli.chromium,
        ..Config::default()
    };

    let renderer: Arc<dyn Renderer> =
        Arc::new(ChromiumRenderer::new(config.chromium_path.clone()).await?);
    info!("Chromium renderer initialized");

    let state = Arc::new(AppState {
        renderer,
        config: config.clone(),
    });

    rest::start(config.port, state).await
}
