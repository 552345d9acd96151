use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    Json,
};
use domain::{Comment, InsertReceipt, NewComment};

use crate::state::AppState;

// 老客户端发的是裸 "application/json"，这里保持全等比较，
// 带 charset 的变体一律按非 JSON 拒绝
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        == Some("application/json")
}

// 去掉开头的 '/' 和至多一个结尾 '/'，剩下的整段路径就是 page
fn page_from_path(path: &str) -> &str {
    let page = path.strip_prefix('/').unwrap_or(path);
    page.strip_suffix('/').unwrap_or(page)
}

pub async fn list_comments(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Vec<Comment>>, (StatusCode, String)> {
    let page = page_from_path(uri.path());
    if page.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Bad request".to_string()));
    }

    let comments = state
        .db
        .list_comments(page)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<InsertReceipt>), (StatusCode, String)> {
    if !is_json_content_type(&headers) {
        return Err((StatusCode::BAD_REQUEST, "Expected JSON".to_string()));
    }

    let comment: NewComment = serde_json::from_slice(&body)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Expected JSON".to_string()))?;

    // 校验是硬门槛，不通过就不会碰存储
    comment
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let date = domain::time::now_utc8();
    let receipt = state
        .db
        .insert_comment(&date, &comment)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_page_from_path_strips_slashes() {
        assert_eq!(page_from_path("/blog/hello"), "blog/hello");
        assert_eq!(page_from_path("/blog/hello/"), "blog/hello");
        assert_eq!(page_from_path("/"), "");
        assert_eq!(page_from_path("/a"), "a");
    }

    #[test]
    fn test_content_type_must_match_exactly() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert!(is_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(!is_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json_content_type(&headers));
    }
}
