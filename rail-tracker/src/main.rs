use rail_tracker::domain::{Pnr, StationCode, TrainNumber, TravelDate};
use rail_tracker::railway::{RailwayClient, RailwayConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Point RAILWAY_BASE_URL at another backend to override the default
    // local service address.
    let mut config = RailwayConfig::new();
    if let Ok(base_url) = std::env::var("RAILWAY_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = RailwayClient::new(config).expect("Failed to create railway client");

    let train = TrainNumber::parse("22177").expect("valid train number");
    let pnr = Pnr::parse("8135417862").expect("valid PNR");
    let new_delhi = StationCode::parse("NDLS").expect("valid station code");
    let mumbai_central = StationCode::parse("BCT").expect("valid station code");
    let date = TravelDate::parse("13-08-2025").expect("valid travel date");

    // Example usage: one call per operation. Each call logs its own
    // outcome; failures do not affect the exit code.
    let _ = client.train_info(&train).await;
    let _ = client.pnr_status(&pnr).await;
    let _ = client.live_at_station(&new_delhi).await;
    let _ = client.track_train(&train, date).await;
    let _ = client.search_trains_between(&new_delhi, &mumbai_central).await;
}
