pub mod health;
pub mod todo;

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Result},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::{
    env::Env,
    error::{kind::NotFound, AppError, Logged},
    state::AppState,
};

pub fn app_with(env: Env) -> NormalizePath<Router<()>> {
    app(AppState::new(env))
}
pub fn app(state: AppState) -> NormalizePath<Router<()>> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
pub fn router(state: AppState) -> Router<()> {
    Router::new()
        .merge(todo::route_todo())
        .nest("/health", health::route_health())
        .route("/healthz", get(health::health))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), logging))
        .layer(cors())
        .with_state(state)
}

// TodoBackend conformance tests run from a browser, so preflight and response
// headers must allow any origin
pub fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

pub async fn not_found(uri: Uri) -> Result<()> {
    Err(AppError::<NotFound, _>::new(StatusCode::NOT_FOUND, Logged(""), uri.to_string()))?
}

pub async fn logging(req: Request<Body>, next: Next) -> impl IntoResponse {
    let (method, uri) = (req.method().clone(), req.uri().clone());
    let res = next.run(req).await;
    let (status, bytes) = (res.status(), res.size_hint().lower());
    tracing::info!("{} {} {} {}", status, method, uri, bytes);
    res
}
