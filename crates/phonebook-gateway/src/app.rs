use std::path::Path;

use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::handlers::{
    create_person_handler, delete_person_handler, get_person_handler, info_handler,
    list_persons_handler, unknown_endpoint, update_person_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Self::layered(Self::routes(&state).fallback(unknown_endpoint)).with_state(state)
    }

    /// Like [`App::router`], but serves files from `dir` for paths no route
    /// claims. Missing files still get the unknown-endpoint response.
    pub fn router_with_static_dir(state: AppState, dir: impl AsRef<Path>) -> Router {
        let files = ServeDir::new(dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(unknown_endpoint.into_service());

        Self::layered(Self::routes(&state).fallback_service(files)).with_state(state)
    }

    /// Request logging at INFO, failures at ERROR, and permissive CORS.
    fn layered(router: Router<AppState>) -> Router<AppState> {
        router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(CorsLayer::permissive())
    }

    fn routes(state: &AppState) -> Router<AppState> {
        let mut person: MethodRouter<AppState> =
            get(get_person_handler).delete(delete_person_handler);
        if state.store().supports_update() {
            person = person.put(update_person_handler);
        }

        Router::new()
            .route("/info", get(info_handler))
            .route(
                "/api/persons",
                get(list_persons_handler).post(create_person_handler),
            )
            .route("/api/persons/{id}", person)
            .method_not_allowed_fallback(unknown_endpoint)
    }
}
