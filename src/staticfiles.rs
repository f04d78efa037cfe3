//! Development static file serving.
//!
//! Serves files under a URL prefix straight from a directory, the way the
//! development server does it. Not meant for production traffic.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use hyper::Method;

use crate::error::{Error, Result};
use crate::http::{Handler, Middleware, Request, Response};

pub struct StaticFilesMiddleware {
	url_prefix: String,
	root: PathBuf,
}

impl StaticFilesMiddleware {
	pub fn new(url_prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
		Self {
			url_prefix: url_prefix.into(),
			root: root.into(),
		}
	}

	/// Map a prefix-stripped request path to a file under the root.
	///
	/// Rejects parent-directory and rooted components so a request can
	/// never escape the static root.
	fn safe_path(&self, rest: &str) -> Option<PathBuf> {
		let rest = rest.trim_start_matches('/');
		if rest.is_empty() {
			return None;
		}

		let relative = Path::new(rest);
		for component in relative.components() {
			match component {
				Component::ParentDir => return None,
				Component::RootDir | Component::Prefix(_) => return None,
				_ => {}
			}
		}

		Some(self.root.join(relative))
	}

	async fn serve(&self, request: &Request, file_path: &Path) -> Result<Response> {
		let contents = tokio::fs::read(file_path).await.map_err(|_| {
			Error::NotFound(format!("No static file at {}", request.path()))
		})?;

		let mime = mime_guess::from_path(file_path).first_or_octet_stream();
		let response = Response::ok().with_header("Content-Type", mime.as_ref());
		if request.method == Method::HEAD {
			return Ok(response);
		}
		Ok(response.with_body(contents))
	}
}

#[async_trait]
impl Middleware for StaticFilesMiddleware {
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
		if request.method != Method::GET && request.method != Method::HEAD {
			return next.handle(request).await;
		}

		let rest = request
			.path()
			.strip_prefix(&self.url_prefix)
			.map(str::to_string);
		let Some(rest) = rest else {
			return next.handle(request).await;
		};

		let Some(file_path) = self.safe_path(&rest) else {
			return Err(Error::NotFound(format!(
				"No static file at {}",
				request.path()
			)));
		};

		self.serve(&request, &file_path).await
	}

	fn should_continue(&self, request: &Request) -> bool {
		request.path().starts_with(&self.url_prefix)
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use rstest::rstest;
	use tempfile::TempDir;

	use super::*;

	struct FallbackHandler;

	#[async_trait]
	impl Handler for FallbackHandler {
		async fn handle(&self, _request: Request) -> Result<Response> {
			Ok(Response::ok().with_body("fallback"))
		}
	}

	fn create_static_file(dir: &TempDir, name: &str, content: &str) {
		fs::write(dir.path().join(name), content).unwrap();
	}

	fn middleware_for(dir: &TempDir) -> StaticFilesMiddleware {
		StaticFilesMiddleware::new("/static/", dir.path())
	}

	fn get(path: &str) -> Request {
		Request::builder().uri(path).build().unwrap()
	}

	fn next() -> Arc<dyn Handler> {
		Arc::new(FallbackHandler)
	}

	#[rstest]
	#[tokio::test]
	async fn serves_existing_file_with_guessed_mime() {
		// Arrange
		let dir = TempDir::new().unwrap();
		create_static_file(&dir, "style.css", "body { color: red; }");
		let middleware = middleware_for(&dir);

		// Act
		let response = middleware
			.process(get("/static/style.css"), next())
			.await
			.unwrap();

		// Assert
		assert_eq!(response.status.as_u16(), 200);
		assert_eq!(response.headers.get("content-type").unwrap(), "text/css");
		assert_eq!(response.body_string(), "body { color: red; }");
	}

	#[rstest]
	#[tokio::test]
	async fn unknown_extension_falls_back_to_octet_stream() {
		let dir = TempDir::new().unwrap();
		create_static_file(&dir, "data.bin2", "xyz");
		let middleware = middleware_for(&dir);

		let response = middleware
			.process(get("/static/data.bin2"), next())
			.await
			.unwrap();

		assert_eq!(
			response.headers.get("content-type").unwrap(),
			"application/octet-stream"
		);
	}

	#[rstest]
	#[tokio::test]
	async fn missing_file_is_not_found() {
		let dir = TempDir::new().unwrap();
		let middleware = middleware_for(&dir);

		let result = middleware.process(get("/static/missing.js"), next()).await;

		assert!(matches!(result, Err(Error::NotFound(_))));
	}

	#[rstest]
	#[case("/static/../Cargo.toml")]
	#[case("/static//etc/hostname")]
	#[case("/static/")]
	#[tokio::test]
	async fn unsafe_or_empty_paths_are_not_found(#[case] path: &str) {
		// Arrange
		let dir = TempDir::new().unwrap();
		create_static_file(&dir, "app.js", "x");
		let middleware = middleware_for(&dir);

		// Act
		let result = middleware.process(get(path), next()).await;

		// Assert
		assert!(
			matches!(result, Err(Error::NotFound(_))),
			"'{}' must never reach the filesystem outside the root",
			path
		);
	}

	#[rstest]
	#[tokio::test]
	async fn head_request_omits_the_body() {
		let dir = TempDir::new().unwrap();
		create_static_file(&dir, "app.js", "console.log(1);");
		let middleware = middleware_for(&dir);

		let request = Request::builder()
			.method(Method::HEAD)
			.uri("/static/app.js")
			.build()
			.unwrap();
		let response = middleware.process(request, next()).await.unwrap();

		assert_eq!(response.status.as_u16(), 200);
		assert!(response.body.is_empty());
		assert!(response.headers.get("content-type").is_some());
	}

	#[rstest]
	#[tokio::test]
	async fn non_get_requests_pass_through() {
		let dir = TempDir::new().unwrap();
		create_static_file(&dir, "app.js", "x");
		let middleware = middleware_for(&dir);

		let request = Request::builder()
			.method(Method::POST)
			.uri("/static/app.js")
			.build()
			.unwrap();
		let response = middleware.process(request, next()).await.unwrap();

		assert_eq!(response.body_string(), "fallback");
	}

	#[rstest]
	fn should_continue_only_under_the_prefix() {
		let dir = TempDir::new().unwrap();
		let middleware = middleware_for(&dir);

		assert!(middleware.should_continue(&get("/static/app.js")));
		assert!(!middleware.should_continue(&get("/page2")));
	}
}
