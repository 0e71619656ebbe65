use axum::{extract::State, response::Response};

use crate::modules::cats::adapters::inbound::trpc::respond;
use crate::shell::state::AppState;

const PATH: &str = "list";

pub async fn handle(State(state): State<AppState>) -> Response {
    respond(PATH, state.list_handler.handle().await)
}
