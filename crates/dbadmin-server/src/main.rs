use std::path::Path;
use std::sync::Arc;

use dbadmin_auth::{AuthGate, StaticValidator};
use dbadmin_config::{AppConfig, resolve_config_path};
use dbadmin_server::AppState;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config_path, source) = resolve_config_path();
    let config = AppConfig::load(Path::new(&config_path))?;

    dbadmin_server::observability::init_tracing(&config.logging.level);
    tracing::info!(path = %config_path, source = %source, "configuration loaded");

    let mut validator = StaticValidator::new();
    for account in &config.accounts {
        validator = validator.with_account(&account.username, &account.password);
    }

    let state = AppState {
        gate: AuthGate::new(Arc::new(validator), config.login_path.clone()),
        title: config.title.clone(),
        server: Arc::new(RwLock::new(config.server.clone())),
    };

    let app = dbadmin_server::router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    tracing::info!(listen = %config.listen, "dbadmin listening");
    axum::serve(listener, app).await?;

    Ok(())
}
