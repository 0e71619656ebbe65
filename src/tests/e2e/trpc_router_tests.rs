use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::body_json;
use crate::tests::fixtures::state::make_test_state;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

fn query(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn mutation(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn tom_and_jerry_over_the_wire() {
    let app = router(make_test_state());

    let (status, json) = call(&app, query("/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["data"], json!([]));

    let (_, tom) = call(&app, mutation("/create", json!({ "name": "Tom" }))).await;
    let (_, jerry) = call(&app, mutation("/create", json!({ "name": "Jerry" }))).await;
    let tom = tom["result"]["data"].clone();
    let jerry = jerry["result"]["data"].clone();

    let (_, json) = call(&app, query("/list")).await;
    assert_eq!(json["result"]["data"], json!([tom.clone(), jerry.clone()]));

    let (status, json) = call(&app, mutation("/delete", json!({ "id": tom["id"] }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["data"], "success");

    let (_, json) = call(&app, query("/list")).await;
    assert_eq!(json["result"]["data"], json!([jerry]));

    let (status, json) = call(&app, query(&format!("/get?input={}", tom["id"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        format!("could not find cat with id {}", tom["id"])
    );
}

#[tokio::test]
async fn queries_are_not_routed_as_mutations() {
    let app = router(make_test_state());
    let response = app
        .oneshot(mutation("/list", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
