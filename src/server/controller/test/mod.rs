use axum::{
    body::{to_bytes, Body},
    http::{Response, StatusCode},
};
use serde::de::DeserializeOwned;


/// Reads a response body and decodes it as JSON.
async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
}
