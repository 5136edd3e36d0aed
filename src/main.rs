use std::net::SocketAddr;

use anyhow::anyhow;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use audio_relay::{ServerConfig, routes, state::AppState};

/// Audio relay - forwards STT/TTS requests to an OpenAI-compatible provider
///
/// All settings come from the environment (or a `.env` file).
#[derive(Parser, Debug)]
#[command(name = "audio-relay")]
#[command(version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize crypto provider for TLS connections
    // This must be done before any TLS connections are attempted
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

    let _cli = Cli::parse();

    let config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;

    let address = config.address();
    let tls_config = config.tls.clone();

    if config.api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /api/stt and /api/tts will answer 500");
    }
    info!(
        "Relaying to {} (stt_model={}, tts_model={}, tts_voice={}, timeout={}s)",
        config.provider_base_url,
        config.stt_model,
        config.tts_model,
        config.tts_voice,
        config.upstream_timeout_seconds
    );

    let app_state = AppState::new(config).map_err(|e| anyhow!(e.to_string()))?;
    let app = routes::create_app(app_state);

    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    // Start server with or without TLS
    if let Some(tls) = tls_config {
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to load TLS certificates from {} and {}: {}",
                    tls.cert_path.display(),
                    tls.key_path.display(),
                    e
                )
            })?;

        info!("Server listening on https://{} (TLS enabled)", socket_addr);

        axum_server::bind_rustls(socket_addr, rustls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| anyhow!("TLS server error: {}", e))?;
    } else {
        info!("Server listening on http://{}", socket_addr);

        let listener = TcpListener::bind(&socket_addr).await?;
        axum::serve(listener, app).await?;
    }

    Ok(())
}
