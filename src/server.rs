#![cfg(feature = "server")]

//! HTTP routes for the sync protocol. Every handler resolves the caller's
//! session from the `x-session-id` header and delegates to `protocol`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info};
use tokio::net::TcpListener;

use crate::protocol::{
    self, FireRequest, FireResponse, FleetResponse, GameOverResponse, GridResponse,
    PhaseChangeResponse, PhaseResponse, PlaceRequest, PlaceResponse, Rejection,
};
use crate::session::{session_id, SessionStore};

/// Header naming the session a request belongs to.
pub const SESSION_HEADER: &str = "x-session-id";

type Store = State<Arc<SessionStore>>;

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

pub fn router(store: Arc<SessionStore>) -> Router {
    Router::new()
        .route("/game-state", get(get_phase))
        .route("/update-grid", get(get_own_grid))
        .route("/target-grid", get(get_target_grid))
        .route("/update-ship-list", get(get_fleet))
        .route("/game-over", get(get_game_over))
        .route("/place-ship", post(place_ship))
        .route("/fire", post(fire))
        .route("/reset", post(reset))
        .route("/start", post(start))
        .fallback(not_found)
        .with_state(store)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(bind: &str, store: Arc<SessionStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;
    Ok(())
}

fn session(headers: &HeaderMap) -> String {
    session_id(headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok())).to_string()
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Rejection> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| Rejection::malformed_request(e.body_text()))
}

async fn get_phase(State(store): Store, headers: HeaderMap) -> Json<PhaseResponse> {
    let id = session(&headers);
    debug!("poll game-state [{id}]");
    Json(store.read(&id, protocol::phase).await)
}

async fn get_own_grid(State(store): Store, headers: HeaderMap) -> Json<GridResponse> {
    let id = session(&headers);
    Json(store.read(&id, protocol::own_grid).await)
}

async fn get_target_grid(State(store): Store, headers: HeaderMap) -> Json<GridResponse> {
    let id = session(&headers);
    Json(store.read(&id, protocol::target_grid).await)
}

async fn get_fleet(State(store): Store, headers: HeaderMap) -> Json<FleetResponse> {
    let id = session(&headers);
    Json(store.read(&id, protocol::fleet_status).await)
}

async fn get_game_over(State(store): Store, headers: HeaderMap) -> Json<GameOverResponse> {
    let id = session(&headers);
    Json(store.read(&id, protocol::game_over).await)
}

async fn place_ship(
    State(store): Store,
    headers: HeaderMap,
    payload: Result<Json<PlaceRequest>, JsonRejection>,
) -> Result<Json<PlaceResponse>, Rejection> {
    let req = decode(payload)?;
    let id = session(&headers);
    store
        .write(&id, |game| protocol::place_ship(game, &req))
        .await
        .map(Json)
}

async fn fire(
    State(store): Store,
    headers: HeaderMap,
    payload: Result<Json<FireRequest>, JsonRejection>,
) -> Result<Json<FireResponse>, Rejection> {
    let req = decode(payload)?;
    let id = session(&headers);
    store
        .write(&id, |game| protocol::fire(game, &req))
        .await
        .map(Json)
}

async fn reset(State(store): Store, headers: HeaderMap) -> Json<PhaseChangeResponse> {
    let id = session(&headers);
    Json(store.write(&id, protocol::reset).await)
}

async fn start(
    State(store): Store,
    headers: HeaderMap,
) -> Result<Json<PhaseChangeResponse>, Rejection> {
    let id = session(&headers);
    store.write(&id, protocol::start).await.map(Json)
}

async fn not_found() -> (StatusCode, Json<Rejection>) {
    let body = Rejection {
        success: false,
        error: "NotFound",
        message: "no such route".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
