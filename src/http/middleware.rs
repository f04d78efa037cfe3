//! Handler and middleware abstractions.
//!
//! A [`Handler`] turns a request into a response. [`Middleware`] wraps a
//! handler to add a cross-cutting concern; a [`MiddlewareChain`] composes
//! several middlewares around an inner handler in registration order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Request, Response};

/// Core abstraction for processing requests.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed; the server
	/// boundary turns it into an error page.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation so `Arc<dyn Handler>` is itself a handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Wraps a handler with a cross-cutting concern.
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request, delegating to `next` when appropriate.
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;

	/// Whether this middleware applies to the given request.
	///
	/// Returning false skips the middleware entirely for that request.
	fn should_continue(&self, _request: &Request) -> bool {
		true
	}
}

/// Composes middlewares around an inner handler.
///
/// Middlewares run in the order they were added; the first added sees the
/// request first and the response last.
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
		self.middlewares.push(middleware);
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		if self.middlewares.is_empty() {
			return self.handler.handle(request).await;
		}

		// Compose innermost-first so the first added middleware runs
		// outermost. Middlewares that do not apply to this request are
		// left out of the composition.
		let mut current = self.handler.clone();
		for middleware in self
			.middlewares
			.iter()
			.rev()
			.filter(|m| m.should_continue(&request))
		{
			current = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current,
			});
		}

		current.handle(request).await
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}
