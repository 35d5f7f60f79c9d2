use showfinder::{api, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showfinder=info,tower_http=info".into()),
        )
        .init();

    // A missing API key fails here, before any chat turn is accepted
    let config = Config::from_env()?;

    let state = api::AppState::new(&config);
    let app = api::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "showfinder listening");
    axum::serve(listener, app).await?;

    Ok(())
}
