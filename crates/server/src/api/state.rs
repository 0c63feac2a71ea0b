use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use metroboard::display::StateUpdate;

use crate::state::AppState;

pub async fn read_state(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.display.read().await.clone();
    Json(snapshot).into_response()
}

pub async fn update_state(
    State(state): State<Arc<AppState>>,
    Json(update): Json<StateUpdate>,
) -> Response {
    let mut snapshot = state.display.write().await;
    snapshot.apply(update);
    Json(snapshot.clone()).into_response()
}
