use ajaxlab_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ajaxlab_observability::init();

    let config = ApiConfig::from_env()?;
    let app = ajaxlab_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
