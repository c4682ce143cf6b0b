//! HTTP Transport Adapter
//!
//! The listener, middleware, and shutdown are the daemon's business; this
//! module only adapts axum requests onto the pure handler.

use axum::body::Body;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Response, Uri};
use axum::Router;

use crate::handler;

/// Build the router. Every path is an identicon request, so the handler is
/// installed as the fallback rather than as a route.
pub fn router() -> Router {
    Router::new().fallback(serve)
}

async fn serve(method: Method, uri: Uri) -> Response<Body> {
    let reply = handler::respond(&method, uri.path(), uri.query());

    tracing::debug!(%method, path = uri.path(), status = %reply.status, "served request");

    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() = reply.status;

    if let Some(content_type) = reply.content_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    if let Some(allow) = reply.allow {
        response.headers_mut().insert(ALLOW, HeaderValue::from_static(allow));
    }

    response
}
