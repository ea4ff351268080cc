use axum::{
    body::Bytes,
    extract::{Path, Request},
    routing::{any, get, post},
    Router,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("start app on {}", listener.local_addr()?);
    Ok(axum::serve(listener, app()).await?)
}

fn app() -> Router {
    Router::new()
        .route("/", get(empty))
        .route("/body", post(body))
        .route("/path/{*rest}", any(path))
        .route("/method", any(method))
}

#[tracing::instrument]
async fn empty() -> &'static str {
    ""
}

#[tracing::instrument]
async fn body(body: Bytes) -> Bytes {
    body
}

#[tracing::instrument]
async fn path(Path(rest): Path<String>) -> String {
    rest
}

#[tracing::instrument]
async fn method(request: Request) -> String {
    request.method().to_string()
}
