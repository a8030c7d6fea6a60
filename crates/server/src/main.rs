use tax_forms_server::{build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Tax Forms service...");

    let config = Config::load()?;
    let addr = config.bind_address();
    let state = AppState::new(config);

    tracing::info!(
        dir = %state.config.templates.dir.display(),
        template_filling = state.capabilities.template_filling,
        drawing = state.capabilities.drawing,
        "Configuration loaded"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Tax Forms service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tax_forms=debug,tax_forms_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
