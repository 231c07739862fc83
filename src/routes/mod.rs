// src/routes/mod.rs
pub mod chat;
pub mod contact;
pub mod portfolio;

use std::any::Any;
use std::path::Path;

use crate::{message::StatusReply, state::SharedState};
use axum::{
    Form, Json, Router,
    extract::{DefaultBodyLimit, FromRequest, Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use contact::contact_handler;
use portfolio::portfolio_handler;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, Authorization";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const HSTS: &str = "max-age=31536000; includeSubDomains";
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn create_router(state: SharedState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/portfolio", get(portfolio_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/ai-chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .nest_service("/css", alias_service(&static_dir, "css"))
        .nest_service("/js", alias_service(&static_dir, "js"))
        .nest_service("/images", alias_service(&static_dir, "images"))
        .fallback_service(site_service(&static_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(state.clone(), cors_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
            tracing::info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
            )
        }))
        .with_state(state)
}

/// Static files, with `index.html` for anything that does not exist.
fn site_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// `/css/x` resolves to `<dir>/css/x` first, then `<dir>/x`.
fn alias_service(dir: &Path, prefix: &str) -> ServeDir<ServeDir<ServeFile>> {
    ServeDir::new(dir.join(prefix)).fallback(site_service(dir))
}

async fn cors_middleware(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let origin = state.config.cors_origin();
    let headers = response.headers_mut();
    match HeaderValue::from_str(origin) {
        Ok(value) => {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
        Err(_) => tracing::warn!(origin, "configured CORS origin is not a valid header value"),
    }
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    // Browsers reject credentials alongside a wildcard origin.
    if origin != "*" {
        headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    }

    response
}

async fn security_headers_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    if state.config.environment.is_production() {
        headers.insert(header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS));
    }

    response
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StatusReply::failure("Internal server error")),
    )
        .into_response()
}

/// A JSON or `application/x-www-form-urlencoded` body. Unreadable bodies
/// are treated like empty ones so validation answers with the usual
/// structured 400.
pub struct Submission<T>(pub T);

impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| {
                value
                    .to_ascii_lowercase()
                    .starts_with("application/x-www-form-urlencoded")
            });

        let body = if is_form {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| rejection.body_text())
        };

        Ok(Submission(body.unwrap_or_else(|error| {
            tracing::debug!(%error, "rejected request body");
            T::default()
        })))
    }
}
