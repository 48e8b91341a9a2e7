use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::core::builder::HostIdentityBuilder;
use crate::core::request::IdentityRequest;
use crate::emit::{JSON_CONTENT_TYPE, to_json};

pub fn router(builder: Arc<HostIdentityBuilder>) -> Router {
    Router::new()
        .route("/", get(get_identity))
        .route("/sysinfo", get(get_identity))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(builder)
}

pub async fn serve(listen: &str, builder: Arc<HostIdentityBuilder>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("Serving host identity on http://{}", listener.local_addr()?);
    axum::serve(listener, router(builder)).await
}

pub(crate) async fn get_identity(
    State(builder): State<Arc<HostIdentityBuilder>>,
    RawQuery(query): RawQuery,
) -> Response {
    let request = IdentityRequest::from_query(query.as_deref().unwrap_or(""));

    let body = match builder.build(request).await.and_then(|identity| to_json(&identity)) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to build host identity: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    };

    ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
}

pub(crate) async fn health_check() -> &'static str {
    "ok"
}
