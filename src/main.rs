use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deepseek_relay::{app, AppState, RelayConfig};

#[derive(Parser, Debug)]
#[command(name = "deepseek-relay")]
#[command(about = "Stateless chat relay in front of the DeepSeek API", long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 先加载 .env，再读参数和配置
    dotenv::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = RelayConfig::from_env();
    config.http.host = args.host;
    config.http.port = args.port;

    // 凭证缺失不阻止启动（health 仍需工作），但要在启动时提醒
    if config.provider.api_key.is_none() {
        tracing::warn!("DEEPSEEK_API_KEY 未配置，/api/chat 将返回 500");
    }

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    let state = AppState::new(config)?;
    let router = app(state);

    tracing::info!("🚀 deepseek-relay listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}
