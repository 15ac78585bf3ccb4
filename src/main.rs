use anyhow::Result;
use travelai_hotels::{TravelAiConfig, VERSION, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TravelAiConfig::load()?;
    let _telemetry = telemetry::init(&config.logging)?;

    tracing::info!("Starting TravelAI hotel search v{}", VERSION);
    web::run(&config).await
}
