use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use log::{debug, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Per-request correlation data for log lines
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Taken from `x-request-id` when the client sends one
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(incoming_id: Option<&str>) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = match incoming_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple()),
        };

        Self {
            correlation_id,
            request_seq,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        format!("[req={} seq={}]", self.correlation_id, self.request_seq)
    }
}

/// Logs method, path, status and latency, and echoes the correlation id
pub async fn log_requests(request: Request, next: Next) -> Response {
    let incoming_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let ctx = RequestContext::new(incoming_id);

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    debug!("{} --> {} {}", ctx.log_prefix(), method, path);

    let mut response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        warn!(
            "{} <-- {} {} {} ({}ms)",
            ctx.log_prefix(),
            method,
            path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    } else {
        info!(
            "{} <-- {} {} {} ({}ms)",
            ctx.log_prefix(),
            method,
            path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    }

    if let Ok(value) = HeaderValue::from_str(&ctx.correlation_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}
