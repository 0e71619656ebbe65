use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};

use crate::modules::cats::adapters::inbound::trpc::{parse_body, respond};
use crate::modules::cats::use_cases::create_cat::command::CreateCat;
use crate::shell::state::AppState;

const PATH: &str = "create";

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateCat>, JsonRejection>,
) -> Response {
    let result = match parse_body(body) {
        Ok(command) => state.create_handler.handle(command).await,
        Err(e) => Err(e),
    };
    respond(PATH, result)
}
