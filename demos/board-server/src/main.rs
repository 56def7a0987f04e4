use tabletop::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the listen address.
const BIND_VAR: &str = "TABLETOP_BIND";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Log levels come from `RUST_LOG`, falling back to `info`.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn bind_addr(configured: Option<String>) -> String {
    configured
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let addr = bind_addr(std::env::var(BIND_VAR).ok());
    let server = TabletopServer::builder()
        .bind(&addr)
        .room_config(RoomConfig::default())
        .build()
        .await?;
    tracing::info!(addr = %server.local_addr()?, "board server listening");

    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await?;
    Ok(())
}
