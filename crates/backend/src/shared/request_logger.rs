use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and duration of every request
pub async fn request_logger(req: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if status.is_success() {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request");
    } else {
        tracing::warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request");
    }

    response
}
