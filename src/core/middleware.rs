//! 核心中间件模块

use axum::{
    body::HttpBody,
    extract::Request,
    http::{header, Method, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// 请求日志中间件
///
/// 每个请求输出一行开发格式的访问日志：
/// `METHOD URL STATUS RESPONSE_TIME ms - CONTENT_LENGTH`
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let content_length = response_content_length(&response);

    let line = access_log_line(&method, &uri, status, start.elapsed(), content_length);
    if status.is_server_error() {
        error!("{}", line);
    } else if status.is_client_error() {
        warn!("{}", line);
    } else {
        info!("{}", line);
    }

    response
}

fn response_content_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// 格式化一行访问日志，长度未知时输出 `-`
pub fn access_log_line(
    method: &Method,
    uri: &Uri,
    status: StatusCode,
    elapsed: Duration,
    content_length: Option<u64>,
) -> String {
    let length = content_length
        .map(|len| len.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {:.3} ms - {}",
        method,
        uri,
        status.as_u16(),
        elapsed.as_secs_f64() * 1000.0,
        length
    )
}
