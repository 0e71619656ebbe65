use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cats::use_cases::create_cat::inbound::http as create_http;
use crate::modules::cats::use_cases::delete_cat::inbound::http as delete_http;
use crate::modules::cats::use_cases::get_cat::inbound::http as get_http;
use crate::modules::cats::use_cases::list_cats::inbound::http as list_http;
use crate::shell::state::AppState;

/// Procedures are named like the tRPC router they mirror: queries are GETs,
/// mutations are POSTs.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get", get(get_http::handle))
        .route("/list", get(list_http::handle))
        .route("/create", post(create_http::handle))
        .route("/delete", post(delete_http::handle))
        .with_state(state)
}
