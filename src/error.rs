use std::marker::PhantomData;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type AppError<K, T = ()> = AppErrorDetail<K, T>;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct Logged<T>(pub T);

#[derive(Debug)]
pub struct AppErrorDetail<K, T> {
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
    pub status: StatusCode,
    pub inner: AppErrorInner<K, T>,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorDetail<K, T> {
    fn into_response(self) -> Response {
        tracing::error!("cause error: {}", self.source); // TODO middleware
        (self.status, self.inner).into_response()
    }
}
impl<K, T> AppErrorDetail<K, T> {
    pub fn new<E>(status: StatusCode, source: E, detail: T) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let (source, msg) = (Box::new(source), PhantomData);
        Self { status, source, inner: AppErrorInner { msg, detail } }
    }
}

pub mod kind {
    pub trait Kind {
        fn msg() -> &'static str;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotFound {}
    impl Kind for NotFound {
        fn msg() -> &'static str {
            "not found"
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Retriable {}
    impl Kind for Retriable {
        fn msg() -> &'static str {
            "please try again later"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppErrorInner<K, T> {
    pub msg: PhantomData<K>,
    pub detail: T,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorInner<K, T> {
    fn into_response(self) -> Response {
        Json(ErrorResponseInner::from(self)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseInner<T> {
    pub msg: String,
    pub detail: T,
}
impl<K: kind::Kind, T> From<AppErrorInner<K, T>> for ErrorResponseInner<T> {
    fn from(inner: AppErrorInner<K, T>) -> Self {
        Self { msg: K::msg().to_string(), detail: inner.detail }
    }
}

pub mod todo {
    use uuid::Uuid;

    use super::*;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum TodoError {
        #[error("no todo found for id `{0}`")]
        NotFound(Uuid),

        #[error("todo store has stopped")]
        Unavailable,
    }

    impl IntoResponse for TodoError {
        fn into_response(self) -> Response {
            let detail = self.to_string();
            match self {
                TodoError::NotFound(_) => {
                    AppErrorDetail::<kind::NotFound, _>::new(StatusCode::NOT_FOUND, self, detail).into_response()
                }
                TodoError::Unavailable => {
                    AppErrorDetail::<kind::Retriable, _>::new(StatusCode::SERVICE_UNAVAILABLE, self, detail)
                        .into_response()
                }
            }
        }
    }
}
