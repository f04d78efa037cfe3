//! Crate-wide error type and result alias.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by routing, template rendering, and the HTTP server.
#[derive(Debug, Error)]
pub enum Error {
	/// No route matched the request path.
	#[error("Not found: {0}")]
	NotFound(String),

	/// The named template is not registered with the engine.
	#[error("Template not found: {0}")]
	TemplateNotFound(String),

	/// A registered template failed to render.
	#[error("Template rendering failed: {0}")]
	Template(String),

	/// Malformed request data.
	#[error("HTTP error: {0}")]
	Http(String),

	/// Invalid settings or listen address.
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),

	#[error("Internal error: {0}")]
	Internal(String),
}

impl Error {
	/// HTTP status code this error maps to at the server boundary.
	pub fn status_code(&self) -> u16 {
		match self {
			Error::NotFound(_) | Error::TemplateNotFound(_) => 404,
			Error::Http(_) => 400,
			Error::Template(_) | Error::ImproperlyConfigured(_) | Error::Internal(_) => 500,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Error::NotFound("x".into()), 404)]
	#[case(Error::TemplateNotFound("x.html".into()), 404)]
	#[case(Error::Template("boom".into()), 500)]
	#[case(Error::Http("bad uri".into()), 400)]
	#[case(Error::ImproperlyConfigured("bad address".into()), 500)]
	#[case(Error::Internal("oops".into()), 500)]
	fn status_code_matches_variant(#[case] error: Error, #[case] expected: u16) {
		assert_eq!(error.status_code(), expected);
	}

	#[rstest]
	fn display_includes_detail() {
		let error = Error::NotFound("No route found for /missing".to_string());

		assert_eq!(error.to_string(), "Not found: No route found for /missing");
	}
}
