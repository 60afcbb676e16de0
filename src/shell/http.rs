use axum::{
    Router,
    routing::{any, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::adapters::inbound::{http as events_http, pages};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/eventos", any(events_http::redirect_to_collection))
        .route(
            "/eventos/",
            post(events_http::create).get(events_http::list),
        )
        .route("/eventos/consulta", get(events_http::find_by_title))
        .route("/eventos/formulario", get(pages::form))
        .route("/eventos/adicionar", post(pages::submit))
        .route(
            "/eventos/{id}",
            put(events_http::update).delete(events_http::delete),
        )
        .with_state(state)
}

/// Router with the transport layers the binary serves.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(state).layer(cors).layer(TraceLayer::new_for_http())
}
