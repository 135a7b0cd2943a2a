use anyhow::Result;
use clap::Parser;
use gemini_studio::models::Config;
use gemini_studio::web::image_app::{self, ImageAppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "image-studio")]
#[command(about = "Web form for generating images with Gemini")]
struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
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

    info!("Starting image-studio");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Image model: {}", config.image_model);

    let state = ImageAppState::from_config(&config);
    let app = image_app::create_router(state);

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
