//! Owned HTTP request passed to handlers.
//!
//! The body is fully buffered before a handler runs, so views never deal
//! with streaming input.

use std::collections::HashMap;
use std::net::SocketAddr;

use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub query_params: HashMap<String, String>,
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = parse_query_params(uri.query());
		Self {
			method,
			uri,
			version,
			headers,
			body,
			query_params,
			remote_addr: None,
		}
	}

	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Path component of the request URI.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Whether the request was made by the asynchronous navigation client.
	///
	/// True when the `X-Requested-With` header carries the conventional
	/// `XMLHttpRequest` marker. The header name lookup is case-insensitive,
	/// the value comparison is exact.
	pub fn is_ajax(&self) -> bool {
		if let Some(value) = self.headers.get("x-requested-with")
			&& let Ok(value) = value.to_str()
		{
			return value == "XMLHttpRequest";
		}
		false
	}
}

fn parse_query_params(query: Option<&str>) -> HashMap<String, String> {
	let Some(query) = query else {
		return HashMap::new();
	};

	query
		.split('&')
		.filter_map(|pair| {
			let mut parts = pair.splitn(2, '=');
			match (parts.next(), parts.next()) {
				(Some(key), Some(value)) if !key.is_empty() => {
					Some((key.to_string(), value.to_string()))
				}
				_ => None,
			}
		})
		.collect()
}

/// Builder used by the server service and by tests.
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	remote_addr: Option<SocketAddr>,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			remote_addr: None,
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Add a header. Invalid names or values are silently dropped.
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let Ok(name) = name.parse::<HeaderName>()
			&& let Ok(value) = HeaderValue::from_str(value)
		{
			self.headers.insert(name, value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e| Error::Http(format!("invalid uri '{}': {}", self.uri, e)))?;
		let mut request = Request::new(self.method, uri, self.version, self.headers, self.body);
		request.remote_addr = self.remote_addr;
		Ok(request)
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}
