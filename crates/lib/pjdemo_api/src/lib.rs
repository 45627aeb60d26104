//! # pjdemo_api
//!
//! HTTP API library for pjdemo.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pjdemo_core::completion::TextGenerator;
use pjdemo_core::fixtures::Fixtures;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{generation, openapi, stubs, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only user lookup tables.
    pub fixtures: Arc<Fixtures>,
    /// Backend used by the generation endpoints.
    pub generator: Arc<dyn TextGenerator>,
}

/// Builds the Axum router with all routes and shared state.
///
/// Every endpoint is reachable both at the root and under `/api`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let endpoints = Router::new()
        // Fixture lookups
        .route(routes::POST_GET_USER_ID, post(users::get_user_id_handler))
        .route(routes::POST_GET_USER_INFO, post(users::get_user_info_handler))
        // LLM-backed generation
        .route(
            routes::POST_GENERATE_EDUCATION_DESCRIPTION,
            post(generation::education_description_handler),
        )
        .route(
            routes::POST_SUMMARIZE_RECENT_LIFE_STATUS,
            post(generation::life_status_handler),
        )
        .route(routes::POST_PJ1_REPORT, post(generation::pj1_report_handler))
        // Stubs
        .route(routes::POST_SEND_EMAIL, post(stubs::send_email_handler))
        .route(routes::POST_GET_WEATHER, post(stubs::get_weather_handler))
        .route(routes::POST_CALCULATE, post(stubs::calculate_handler))
        .route(routes::POST_EXIT_SCRIPT, post(stubs::exit_script_handler));

    Router::new()
        .merge(endpoints.clone())
        .nest(routes::API_PREFIX, endpoints)
        .route(routes::GET_OPENAPI_JSON, get(openapi::openapi_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
