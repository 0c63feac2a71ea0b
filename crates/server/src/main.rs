mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use metroboard::{
    refdata::{Config, RefData},
    repository::Repository,
};
use std::sync::Arc;
use tracing::{error, info};

const PORT: u32 = 8089;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    let data_dir = args.get(1).map(String::as_str).unwrap_or("data");

    info!("Loading reference data from {data_dir}...");
    let data = match RefData::new(Config::default()).load_dir(data_dir) {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to load reference data: {err}");
            std::process::exit(1);
        }
    };
    let repository = Repository::new().with_refdata(data);
    let Some(state) = AppState::new(repository) else {
        error!("Route table contains no lines");
        std::process::exit(1);
    };
    let state = Arc::new(state);

    let app = axum::Router::new()
        .route("/api/lines", get(api::lines))
        .route("/api/services", get(api::services))
        .route("/api/stations", get(api::stations))
        .route("/api/board", get(api::board))
        .route("/api/line_map", get(api::line_map))
        .route("/api/station_detail", get(api::station_detail))
        .route("/api/state", get(api::read_state).post(api::update_state))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{PORT}"))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
