use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};

use crate::error::Error;

/// HTTP response produced by handlers.
///
/// # Examples
///
/// ```
/// use website::http::Response;
///
/// let response = Response::ok().with_body("Hello");
/// assert_eq!(response.status.as_u16(), 200);
/// assert_eq!(&response.body[..], b"Hello");
/// ```
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	pub fn method_not_allowed() -> Self {
		Self::new(StatusCode::METHOD_NOT_ALLOWED)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a header. Invalid names or values are silently dropped.
	///
	/// # Examples
	///
	/// ```
	/// use website::http::Response;
	///
	/// let response = Response::ok().with_header("Content-Type", "text/html; charset=utf-8");
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap(),
	///     "text/html; charset=utf-8"
	/// );
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(name) = name.parse::<HeaderName>()
			&& let Ok(value) = HeaderValue::from_str(value)
		{
			self.headers.insert(name, value);
		}
		self
	}

	pub fn body_string(&self) -> String {
		String::from_utf8_lossy(&self.body).to_string()
	}
}

impl From<Error> for Response {
	/// Render the framework error page for the error's status code.
	fn from(error: Error) -> Self {
		crate::shortcuts::error_response(&error)
	}
}
