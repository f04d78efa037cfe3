//! Embedded Tera engine and page composition.
//!
//! Page templates are self-contained fragments. Rendering happens in two
//! passes: the fragment is rendered first, then wrapped in a base template
//! that receives it as `content`. The base is chosen per request through
//! the context's `base` key, which is how the asynchronous navigation
//! endpoints swap the full document chrome for the bare fragment.

use hyper::StatusCode;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::error::{Error, Result};

/// Base template used when the context does not name one.
pub const DEFAULT_BASE: &str = "base.html";

static TERA: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();
	tera.add_raw_template("base.html", include_str!("../templates/base.html"))
		.expect("base.html should parse");
	tera.add_raw_template("base_ajax.html", include_str!("../templates/base_ajax.html"))
		.expect("base_ajax.html should parse");
	tera.add_raw_template("page1.html", include_str!("../templates/page1.html"))
		.expect("page1.html should parse");
	tera.add_raw_template("page2.html", include_str!("../templates/page2.html"))
		.expect("page2.html should parse");
	tera.add_raw_template("404.html", include_str!("../templates/404.html"))
		.expect("404.html should parse");
	tera
});

pub fn has_template(name: &str) -> bool {
	TERA.get_template_names().any(|n| n == name)
}

/// Render a page template composed into its base.
///
/// The base is taken from the context's `base` key, falling back to
/// [`DEFAULT_BASE`]. The rendered fragment is exposed to the base as
/// `content`.
pub fn render_to_string(template_name: &str, context: &Context) -> Result<String> {
	if !has_template(template_name) {
		return Err(Error::TemplateNotFound(template_name.to_string()));
	}

	let content = TERA
		.render(template_name, context)
		.map_err(|e| Error::Template(format!("{}: {}", template_name, e)))?;

	let base = match context.get("base").and_then(|value| value.as_str()) {
		Some(name) => name.to_string(),
		None => DEFAULT_BASE.to_string(),
	};
	if !has_template(&base) {
		return Err(Error::TemplateNotFound(base));
	}

	let mut base_context = context.clone();
	base_context.insert("content", &content);
	TERA.render(&base, &base_context)
		.map_err(|e| Error::Template(format!("{}: {}", base, e)))
}

/// Render the error page for a status code.
///
/// Uses the `{status}.html` template when one is registered, otherwise a
/// minimal built-in page.
pub fn render_error_page(status: StatusCode) -> String {
	let reason = status.canonical_reason().unwrap_or("Error");
	let name = format!("{}.html", status.as_u16());

	if has_template(&name) {
		let mut context = Context::new();
		context.insert("status", &status.as_u16());
		context.insert("reason", reason);
		if let Ok(page) = TERA.render(&name, &context) {
			return page;
		}
	}

	format!(
		"<!DOCTYPE html>\n<html>\n<head><title>{code} {reason}</title></head>\n\
		 <body>\n<h1>{code} {reason}</h1>\n</body>\n</html>\n",
		code = status.as_u16(),
		reason = reason,
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("base.html")]
	#[case("base_ajax.html")]
	#[case("page1.html")]
	#[case("page2.html")]
	#[case("404.html")]
	fn site_templates_are_registered(#[case] name: &str) {
		assert!(has_template(name), "'{}' should be embedded", name);
	}

	#[rstest]
	fn default_base_wraps_the_fragment_in_the_full_document() {
		// Act
		let html = render_to_string("page1.html", &Context::new()).unwrap();

		// Assert
		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains("id=\"Content\""));
		assert!(html.contains("Page 1"));
	}

	#[rstest]
	fn ajax_base_yields_only_the_fragment() {
		// Arrange
		let mut context = Context::new();
		context.insert("base", "base_ajax.html");

		// Act
		let html = render_to_string("page2.html", &context).unwrap();

		// Assert
		assert!(html.contains("Page 2"));
		assert!(
			!html.contains("<!DOCTYPE html>"),
			"the bare base must not emit document chrome"
		);
		assert!(!html.contains("id=\"Menu\""));
	}

	#[rstest]
	fn fragment_markup_survives_composition_unescaped() {
		let html = render_to_string("page1.html", &Context::new()).unwrap();

		assert!(
			!html.contains("&lt;"),
			"the fragment is trusted markup and must not be escaped"
		);
	}

	#[rstest]
	fn unknown_page_template_is_reported_by_name() {
		let result = render_to_string("page3.html", &Context::new());

		match result {
			Err(Error::TemplateNotFound(name)) => assert_eq!(name, "page3.html"),
			other => panic!("expected TemplateNotFound, got {:?}", other),
		}
	}

	#[rstest]
	fn unknown_base_template_is_reported_by_name() {
		let mut context = Context::new();
		context.insert("base", "base_mobile.html");

		let result = render_to_string("page1.html", &context);

		match result {
			Err(Error::TemplateNotFound(name)) => assert_eq!(name, "base_mobile.html"),
			other => panic!("expected TemplateNotFound, got {:?}", other),
		}
	}

	#[rstest]
	fn error_page_uses_registered_template_for_404() {
		let page = render_error_page(StatusCode::NOT_FOUND);

		assert!(page.contains("404"));
		assert!(page.contains("Not Found"));
	}

	#[rstest]
	fn error_page_falls_back_for_unregistered_status() {
		let page = render_error_page(StatusCode::INTERNAL_SERVER_ERROR);

		assert!(page.contains("500 Internal Server Error"));
		assert!(page.starts_with("<!DOCTYPE html>"));
	}
}
