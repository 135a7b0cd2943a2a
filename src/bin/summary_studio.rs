use anyhow::Result;
use clap::Parser;
use gemini_studio::models::Config;
use gemini_studio::web::summary_app::{self, SummaryAppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "summary-studio")]
#[command(about = "Web form for multilingual summarisation with Gemini")]
struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8081)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting summary-studio");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Text model: {}", config.text_model);

    let state = SummaryAppState::from_config(&config);
    let app = summary_app::create_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
