//! axum bridge: mount a handler chain as a router fallback.
//!
//! The request body is collected up front (bounded by
//! `bridge.max_body_bytes`), the chain runs on the blocking pool against a
//! `BufferedResponse`, and the buffered result becomes the axum response.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request as AxumRequest, State};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http::StatusCode;
use http_body_util::{BodyExt, LengthLimitError, Limited};

use reqmetrics_core::{BufferedResponse, Handler, Request};

use crate::config::BridgeSection;

struct BridgeState<H> {
    handler: Arc<H>,
    max_body_bytes: usize,
}

impl<H> Clone for BridgeState<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Router that sends every request to `handler`.
pub fn build_router<H>(handler: Arc<H>, cfg: &BridgeSection) -> Router
where
    H: Handler + 'static,
{
    let state = BridgeState {
        handler,
        max_body_bytes: cfg.max_body_bytes,
    };
    Router::new()
        .fallback(serve_chain::<H>)
        .with_state(state)
}

async fn serve_chain<H>(State(state): State<BridgeState<H>>, req: AxumRequest) -> Response
where
    H: Handler + 'static,
{
    let (parts, body) = req.into_parts();
    let body = match Limited::new(body, state.max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), limit = state.max_body_bytes, "request body over limit");
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
        Err(e) => {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), error = %e, "request body unreadable");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    let req = Request::from_parts(parts, body);

    let handler = state.handler;
    let joined = tokio::task::spawn_blocking(move || {
        let mut res = BufferedResponse::new();
        handler.serve(&req, &mut res);
        res
    })
    .await;

    match joined {
        Ok(res) => res.into_response().map(Body::from),
        Err(e) => {
            tracing::error!(error = %e, "handler chain did not complete");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
