// ABOUTME: RepCoach HTTP server binary
// ABOUTME: Loads environment configuration, applies CLI overrides, initializes logging, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

//! # RepCoach Server Binary
//!
//! Starts the workout recommendation API. Configuration comes from the
//! environment (and an optional `.env`); `--host` and `--http-port` override it.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use repcoach_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use tracing::{error, info};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "repcoach-server")]
#[command(about = "RepCoach - rules-based workout recommendations and weekly plans")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    logging::init_from_env()?;
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    if let Err(e) = server::run(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
