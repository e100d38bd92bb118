//! Image analysis proxy
//!
//! This application accepts an image and a prompt, forwards them to Claude or
//! OpenAI, and returns the JSON object found in the provider's reply.

mod api;
mod conversion;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::dispatcher::AnalyzeDispatcher;
use crate::core::logging::init_logging;
use crate::core::provider::ProviderKind;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    let dispatcher = AnalyzeDispatcher::from_config(&config);
    for kind in [ProviderKind::Claude, ProviderKind::OpenAI] {
        if dispatcher.is_configured(kind) {
            info!("{} provider configured", kind);
        } else {
            warn!("{} API key not set; requests for it will fail", kind);
        }
    }

    let app = create_router(AppState {
        dispatcher: Arc::new(dispatcher),
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!(
        "Server listening on http://{} (timeout {}s, claude model {}, openai model {})",
        addr, config.request_timeout, config.claude_model, config.openai_model
    );

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print help message
fn print_help() {
    println!("Image Analysis Proxy v0.1.0");
    println!();
    println!("Usage: analyze-proxy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Endpoints:");
    println!("  POST /api/analyze  {{provider?, base64Data, mimeType, prompt}}");
    println!("  GET  /health");
    println!();
    println!("Environment variables:");
    println!("  CLAUDE_API_KEY  - Anthropic API key (required for provider=claude)");
    println!("  OPENAI_API_KEY  - OpenAI API key (required for provider=openai)");
    println!("  CONFIG_PATH     - TOML config file (default: config.toml, optional)");
    println!("  HOST            - Server host (default: 0.0.0.0)");
    println!("  PORT            - Server port (default: 8082)");
    println!("  LOG_LEVEL       - Logging level (default: info)");
    println!("  REQUEST_TIMEOUT - Provider call timeout in seconds (default: 90)");
}
