//! HTTP/1 server loop on tokio + hyper.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::error::{Error, Result};
use crate::http::{Handler, Middleware, MiddlewareChain, Request};
use crate::shortcuts::error_response;

/// HTTP server with middleware support.
///
/// Each accepted connection is handled on its own task; handlers keep no
/// shared mutable state, so no further coordination is needed.
pub struct HttpServer {
	handler: Arc<dyn Handler>,
	middlewares: Vec<Arc<dyn Middleware>>,
}

impl HttpServer {
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			handler,
			middlewares: Vec::new(),
		}
	}

	/// Add a middleware. Middlewares run in the order they are added.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// The handler with the middleware chain applied.
	pub fn handler(&self) -> Arc<dyn Handler> {
		if self.middlewares.is_empty() {
			return self.handler.clone();
		}

		let mut chain = MiddlewareChain::new(self.handler.clone());
		for middleware in &self.middlewares {
			chain.add_middleware(middleware.clone());
		}
		Arc::new(chain)
	}

	/// Bind the address and serve connections until the task is stopped.
	pub async fn listen(self, addr: SocketAddr) -> Result<()> {
		let listener = TcpListener::bind(addr)
			.await
			.map_err(|e| Error::Internal(format!("failed to bind {}: {}", addr, e)))?;
		println!("Server listening on http://{}", addr);

		let handler = self.handler();

		loop {
			let (stream, remote_addr) = listener
				.accept()
				.await
				.map_err(|e| Error::Internal(format!("accept failed: {}", e)))?;
			let handler = handler.clone();

			tokio::task::spawn(async move {
				if let Err(err) = Self::handle_connection(stream, remote_addr, handler).await {
					tracing::warn!(error = %err, "connection error");
				}
			});
		}
	}

	/// Serve HTTP/1 requests on an already-accepted connection.
	///
	/// Public so tests can drive an externally-bound listener.
	pub async fn handle_connection(
		stream: TcpStream,
		remote_addr: SocketAddr,
		handler: Arc<dyn Handler>,
	) -> Result<()> {
		let io = TokioIo::new(stream);
		let service = RequestService {
			handler,
			remote_addr,
		};

		http1::Builder::new()
			.serve_connection(io, service)
			.await
			.map_err(|e| Error::Internal(format!("connection failed: {}", e)))?;

		Ok(())
	}
}

/// Bridges hyper requests into [`Request`] values and handler results back
/// into hyper responses. Handler errors become framework error pages here.
struct RequestService {
	handler: Arc<dyn Handler>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = Box<dyn std::error::Error + Send + Sync>;
	type Future =
		Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body_bytes = body.collect().await?.to_bytes();

			let mut request =
				Request::new(parts.method, parts.uri, parts.version, parts.headers, body_bytes);
			request.remote_addr = Some(remote_addr);

			let response = match handler.handle(request).await {
				Ok(response) => response,
				Err(error) => {
					tracing::warn!(
						error = %error,
						status = error.status_code(),
						"request failed"
					);
					error_response(&error)
				}
			};

			let mut builder = hyper::Response::builder().status(response.status);
			for (name, value) in response.headers.iter() {
				builder = builder.header(name, value);
			}

			Ok(builder.body(Full::new(response.body))?)
		})
	}
}
