use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::cats::adapters::inbound::trpc::{parse_query_input, respond};
use crate::shell::state::AppState;

const PATH: &str = "get";

#[derive(Deserialize)]
pub struct GetCatParams {
    pub input: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<GetCatParams>, QueryRejection>,
) -> Response {
    let result = match parse_query_input::<i64>(params.map(|Query(p)| p.input)) {
        Ok(id) => state.get_handler.handle(id).await,
        Err(e) => Err(e),
    };
    respond(PATH, result)
}
