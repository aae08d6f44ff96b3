//! Dom Ojca server binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML plus environment
//! 2. Build the Gemini and EmailJS clients
//! 3. Start the idle chat session sweeper
//! 4. Serve the site and its API with axum

mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use domojca_api::state::AppState;
use domojca_chat::{FallbackMessenger, GeminiClient, MessagingClient};
use domojca_contact::EmailJsClient;
use domojca_core::DomOjcaConfig;

use cli::CliArgs;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drop chat sessions nobody has touched for a while.
async fn session_sweeper(state: AppState) {
    let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        let purged = state.sessions.purge_expired();
        if purged > 0 {
            tracing::debug!(purged, remaining = state.sessions.len(), "Idle chat sessions purged");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so its log level can apply.
    let config_file = args.resolve_config_path();
    let loaded = DomOjcaConfig::load(&config_file);
    let mut config = loaded.as_ref().ok().cloned().unwrap_or_default();

    // Tracing.
    let filter = args.resolve_log_filter(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Dom Ojca v{}", env!("CARGO_PKG_VERSION"));

    match &loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Configuration not loaded, using defaults"
        ),
    }

    // Overrides: environment secrets, then CLI flags.
    config.apply_env();
    config.general.port = args.resolve_port(config.general.port);
    config.general.bind_address = args.resolve_bind(&config.general.bind_address);

    // Assistant backend.
    let gemini = GeminiClient::new(&config.chat)?;
    if !gemini.has_api_key() {
        tracing::warn!("No Gemini API key configured (GEMINI_API_KEY); chat will not get real replies");
    }
    let messaging: Arc<dyn MessagingClient> = if config.chat.fallback_replies {
        Arc::new(FallbackMessenger::new(gemini))
    } else {
        Arc::new(gemini)
    };
    tracing::info!(
        model = %config.chat.model,
        fallback = config.chat.fallback_replies,
        "Chat backend ready"
    );

    // Contact delivery.
    let emailjs = EmailJsClient::new(&config.contact)?;
    if !emailjs.is_configured() {
        tracing::warn!("EmailJS is not fully configured; contact messages will fail to send");
    }

    let state = AppState::new(config.clone(), messaging, Arc::new(emailjs));

    // === Background tasks ===

    tokio::spawn(session_sweeper(state.clone()));

    // === HTTP server ===

    if let Err(e) = domojca_api::start_server(&config, state).await {
        tracing::error!(error = %e, "HTTP server stopped");
        if config.general.port != 0 {
            tracing::error!(
                "Is another instance running? Try: DOMOJCA_PORT={} domojca",
                config.general.port.saturating_add(1)
            );
        }
        return Err(e.into());
    }

    Ok(())
}
