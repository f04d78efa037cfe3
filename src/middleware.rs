//! Site middleware.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Handler, Middleware, Request, Response};

/// Logs one line per handled request with method, path, status and timing.
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl Middleware for LoggingMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		let method = request.method.clone();
		let path = request.path().to_string();
		let start = Instant::now();

		let response = next.handle(request).await?;

		tracing::info!(
			method = %method,
			path = %path,
			status = response.status.as_u16(),
			elapsed_ms = start.elapsed().as_millis() as u64,
			"request handled"
		);
		Ok(response)
	}
}
