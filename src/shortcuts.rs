//! View helpers.

use std::collections::HashMap;

use hyper::StatusCode;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::http::{Request, Response};
use crate::templates;

/// Render a template with the given context into an HTML response.
///
/// Context values are serialized through serde, so anything `Serialize`
/// works as a value. Rendering errors propagate to the caller; views do
/// not handle them locally.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use website::http::Request;
/// use website::shortcuts::render;
///
/// let request = Request::builder().uri("/").build().unwrap();
/// let response = render(&request, "page1.html", HashMap::<&str, &str>::new()).unwrap();
/// assert_eq!(response.status.as_u16(), 200);
/// ```
pub fn render<K, V>(
	_request: &Request,
	template_name: &str,
	context: HashMap<K, V>,
) -> Result<Response>
where
	K: AsRef<str>,
	V: Serialize,
{
	let mut tera_context = tera::Context::new();
	for (key, value) in &context {
		let value = serde_json::to_value(value).map_err(|e| {
			Error::Template(format!(
				"context value for '{}' is not serializable: {}",
				key.as_ref(),
				e
			))
		})?;
		tera_context.insert(key.as_ref(), &value);
	}

	let html = templates::render_to_string(template_name, &tera_context)?;
	Ok(Response::ok()
		.with_header("Content-Type", "text/html; charset=utf-8")
		.with_body(html))
}

/// Build the HTML error response for a handler error.
///
/// This is the boundary the server falls back to when a handler returns
/// an error: unmatched routes become 404 pages, rendering failures 500s.
pub fn error_response(error: &Error) -> Response {
	let status =
		StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
	Response::new(status)
		.with_header("Content-Type", "text/html; charset=utf-8")
		.with_body(templates::render_error_page(status))
}
