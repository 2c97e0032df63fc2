use std::sync::Arc;
use std::time::Instant;

use clap::Parser;

use rssfinder::cli::{Cli, Commands};
use rssfinder::config::Config;
use rssfinder::errors::FinderResult;
use rssfinder::server;
use rssfinder::services::Discovery;
use rssfinder::telemetry::{init_telemetry, log_report};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> FinderResult<()> {
    let cli = Cli::parse();

    init_telemetry();

    // Load configuration
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Discover { url, pretty } => cmd_discover(&url, pretty, &config).await,
        Commands::Links { url } => cmd_links(&url, &config).await,
        Commands::Serve {
            bind,
            port,
            cert,
            key,
        } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if cert.is_some() {
                config.tls_cert = cert;
                config.tls_key = key;
            }
            cmd_serve(&config).await
        }
    }
}

async fn cmd_discover(url: &str, pretty: bool, config: &Config) -> FinderResult<()> {
    let discovery = Discovery::from_config(config);
    let started = Instant::now();

    let report = discovery.discover(url).await?;
    log_report(url, &report, started.elapsed());

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

async fn cmd_links(url: &str, config: &Config) -> FinderResult<()> {
    let discovery = Discovery::from_config(config);
    let candidates = discovery.candidates(url).await?;

    for candidate in &candidates {
        println!("{}", candidate);
    }
    tracing::info!(url, count = candidates.len(), "same-domain links listed");

    Ok(())
}

async fn cmd_serve(config: &Config) -> FinderResult<()> {
    let discovery = Arc::new(Discovery::from_config(config));

    match config.tls_files() {
        Some((cert, key)) => server::serve_tls(discovery, &config.listen_addr(), cert, key).await,
        None => server::serve(discovery, &config.listen_addr()).await,
    }
}
