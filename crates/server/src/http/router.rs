use super::handlers::comments;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

// 方法决定行为，路径只承载 page，所以 "/" 和通配路由共用同一组处理器。
// 未命中的方法由 fallback 统一回 405。
pub fn build_router(state: AppState) -> Router {
    let routes = get(comments::list_comments)
        .post(comments::create_comment)
        .options(comments::preflight)
        .fallback(comments::method_not_allowed);

    Router::new()
        .route("/", routes.clone())
        .route("/*page", routes)
        // 契约要求三个 CORS 头出现在每一个响应上，包括错误分支
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
