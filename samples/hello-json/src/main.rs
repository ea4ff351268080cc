use axum::{extract::Path, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("start app on {}", listener.local_addr()?);
    Ok(axum::serve(listener, app()).await?)
}

fn app() -> Router {
    Router::new().route("/", get(hello_world)).route("/{name}", get(hello))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Greeting {
    hello: String,
}

#[tracing::instrument]
async fn hello_world() -> Json<Greeting> {
    Json(Greeting { hello: "world".to_string() })
}

#[tracing::instrument]
async fn hello(Path(name): Path<String>) -> Json<Greeting> {
    Json(Greeting { hello: name })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    async fn get_greeting(uri: &str) -> (StatusCode, Greeting) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_hello_world() {
        let (status, greeting) = get_greeting("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(greeting, Greeting { hello: "world".to_string() });
    }

    #[tokio::test]
    async fn test_hello_name() {
        let (status, greeting) = get_greeting("/rust").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(greeting, Greeting { hello: "rust".to_string() });
    }
}
