use super::*;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn bad_request_keeps_message() {
    let (status, body) = body_json(ApiError::BadRequest("query is required".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "query is required");
    assert_eq!(body["error"]["code"], 400);
}

#[tokio::test]
async fn upstream_failure_hides_details() {
    let (status, body) = body_json(ApiError::Media(MediaError::Transport("dns error for api.rawg.io".into()))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["message"], "External service error");
    assert_eq!(body["error"]["code"], 502);
}

#[tokio::test]
async fn upstream_not_found_is_not_found() {
    let (status, body) = body_json(MediaError::Upstream { status: 404 }.into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Resource not found");
}

#[tokio::test]
async fn unavailable_names_the_feature() {
    let (status, body) = body_json(ApiError::Unavailable("Game catalogue")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["message"], "Game catalogue is not configured");
}

#[test]
fn status_mapping() {
    assert_eq!(ApiError::Media(MediaError::Upstream { status: 404 }).status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::Media(MediaError::Upstream { status: 500 }).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ApiError::Media(MediaError::Parse("eof".into())).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        ApiError::Media(MediaError::HttpClientBuild("tls".into())).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
