// ============================================================
// Layer 1b — Web Presentation Layer
// ============================================================
// An axum router in front of one loaded FormPredictor:
//
//   GET  /  and /predict    blank form (with defaults)
//   POST /  and /predict    validate → predict → re-render form
//   GET  /about             static
//   GET  /contact           static
//   GET  /methodology       feature order and encoder codes
//   GET  /health            "ok"
//
// The handler boundary is where errors stop: a ValidationError
// or an unreadable form body becomes an inline "Error: ..."
// message, anything else is logged and replaced with a generic
// message. Either way the
// response is the form page, never a stack trace.
//
// The FormPredictor is built once before the listener binds and
// shared read-only through an Arc, so handlers need no locking.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Html,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::FormPredictor;
use crate::data::form::FormFields;
use crate::domain::error::PredictError;

/// HTML rendering for every page
pub mod pages;

use pages::Outcome;

pub const UNEXPECTED_MESSAGE: &str =
    "An unexpected error occurred during prediction. Please try again.";

#[derive(Clone)]
pub struct AppState {
    predictor: Arc<dyn FormPredictor>,
}

pub fn router(predictor: Arc<dyn FormPredictor>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/predict", get(index).post(submit))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/methodology", get(methodology))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { predictor })
}

/// Bind and serve until Ctrl-C.
pub async fn serve(predictor: Arc<dyn FormPredictor>, addr: SocketAddr) -> Result<()> {
    let app = router(predictor);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to {addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Run one submission through the predictor and decide what to show.
pub fn outcome_for(predictor: &dyn FormPredictor, form: &FormFields) -> Outcome {
    match predictor.predict(form) {
        Ok(p) => Outcome::Predicted(p),
        Err(PredictError::Validation(e)) => {
            tracing::info!(field = e.field(), "rejected submission: {}", e);
            Outcome::Error(format!("Error: {e}"))
        }
        Err(e) => {
            tracing::error!("{} prediction failed: {}", predictor.kind(), e);
            Outcome::Error(UNEXPECTED_MESSAGE.to_string())
        }
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let p = state.predictor.as_ref();
    Html(pages::form_page(p, &p.defaults(), &Outcome::Blank))
}

async fn submit(
    State(state): State<AppState>,
    body: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let p = state.predictor.as_ref();
    match body {
        Ok(Form(fields)) => {
            let form = FormFields::new(fields);
            let outcome = outcome_for(p, &form);
            Html(pages::form_page(p, &form, &outcome))
        }
        Err(rejection) => {
            tracing::info!("unreadable form body: {}", rejection);
            let outcome = Outcome::Error(format!("Error: {}", rejection.body_text()));
            Html(pages::form_page(p, &p.defaults(), &outcome))
        }
    }
}

async fn about(State(state): State<AppState>) -> Html<String> {
    Html(pages::about_page(state.predictor.as_ref()))
}

async fn contact(State(state): State<AppState>) -> Html<String> {
    Html(pages::contact_page(state.predictor.as_ref()))
}

async fn methodology(State(state): State<AppState>) -> Html<String> {
    Html(pages::methodology_page(state.predictor.as_ref()))
}

async fn health() -> &'static str {
    "ok"
}
