//! A single entry in the URL table.

use std::sync::Arc;

use crate::http::Handler;

/// Binds a literal path to a handler, optionally under a symbolic name.
///
/// Paths carry no parameters; matching is exact string equality. The same
/// handler may back several routes (the content endpoints reuse the page
/// views), so routes share handlers through `Arc`.
#[derive(Clone)]
pub struct Route {
	pub path: String,
	handler: Arc<dyn Handler>,
	pub name: Option<String>,
}

impl Route {
	pub fn new(path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
		Self {
			path: path.into(),
			handler,
			name: None,
		}
	}

	/// Convenience constructor that wraps the handler in an `Arc`.
	pub fn from_handler(path: impl Into<String>, handler: impl Handler + 'static) -> Self {
		Self::new(path, Arc::new(handler))
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn handler_arc(&self) -> Arc<dyn Handler> {
		self.handler.clone()
	}
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use rstest::rstest;

	use crate::error::Result;
	use crate::http::{Request, Response};

	struct DummyHandler;

	#[async_trait]
	impl Handler for DummyHandler {
		async fn handle(&self, _request: Request) -> Result<Response> {
			Ok(Response::ok())
		}
	}

	#[rstest]
	fn route_starts_unnamed() {
		let route = Route::from_handler("/page2", DummyHandler);

		assert_eq!(route.path, "/page2");
		assert_eq!(route.name, None);
	}

	#[rstest]
	fn with_name_sets_the_symbolic_name() {
		let route = Route::from_handler("/", DummyHandler).with_name("page1");

		assert_eq!(route.name.as_deref(), Some("page1"));
	}

	#[rstest]
	fn clones_share_the_handler() {
		let route = Route::from_handler("/", DummyHandler);
		let copy = route.clone();

		assert!(Arc::ptr_eq(&route.handler_arc(), &copy.handler_arc()));
	}
}
