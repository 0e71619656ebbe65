// tRPC-style wire envelope shared by the HTTP procedures.
//
// Success: {"result":{"type":"data","data":<output>}}
// Failure: {"error":{"message":"..","code":<json-rpc code>,
//            "data":{"code":"BAD_REQUEST","httpStatus":400,"path":"get"}}}

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::modules::cats::core::errors::CatError;

#[derive(Serialize)]
struct SuccessEnvelope<T> {
    result: SuccessBody<T>,
}

#[derive(Serialize)]
struct SuccessBody<T> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: T,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: i32,
    data: ErrorData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorData {
    code: &'static str,
    http_status: u16,
    path: &'static str,
}

pub fn respond<T: Serialize>(path: &'static str, result: Result<T, CatError>) -> Response {
    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(SuccessEnvelope {
                result: SuccessBody { kind: "data", data },
            }),
        )
            .into_response(),
        Err(error) => error_response(path, &error),
    }
}

fn error_response(path: &'static str, error: &CatError) -> Response {
    let code = error.code();
    let status = StatusCode::from_u16(code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorEnvelope {
            error: ErrorBody {
                message: error.to_string(),
                code: code.jsonrpc_code(),
                data: ErrorData {
                    code: code.as_str(),
                    http_status: code.http_status(),
                    path,
                },
            },
        }),
    )
        .into_response()
}

/// Decodes the JSON carried in a query's `input` parameter.
pub fn parse_query_input<T: DeserializeOwned>(
    raw: Result<Option<String>, QueryRejection>,
) -> Result<T, CatError> {
    let raw = raw
        .map_err(|rejection| CatError::InvalidInput(rejection.body_text()))?
        .ok_or_else(|| CatError::InvalidInput("missing input".into()))?;
    serde_json::from_str(&raw).map_err(|e| CatError::InvalidInput(format!("invalid input: {e}")))
}

pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, CatError> {
    body.map(|Json(inner)| inner).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected request body");
        CatError::InvalidInput(rejection.body_text())
    })
}
