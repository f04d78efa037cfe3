//! Static URL table with exact-match dispatch.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::http::{Handler, Request, Response};
use crate::routing::{Route, UrlReverser};

/// Routes requests by comparing the request path against a fixed table.
///
/// The table is built once at startup and never mutated afterwards.
/// Matching is exact string equality in registration order, so when two
/// entries share a path the earlier one wins. Entries are deliberately
/// never deduplicated; the table may bind several paths to one handler.
pub struct UrlRouter {
	routes: Vec<Route>,
	reverser: UrlReverser,
}

impl UrlRouter {
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			reverser: UrlReverser::new(),
		}
	}

	/// Append a route; named routes are also registered for reversal.
	pub fn add_route(&mut self, route: Route) {
		if let Some(name) = &route.name {
			self.reverser.register(name.clone(), route.path.clone());
		}
		self.routes.push(route);
	}

	/// First route whose path equals the request path, if any.
	pub fn resolve(&self, path: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.path == path)
	}

	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	pub fn reverser(&self) -> &UrlReverser {
		&self.reverser
	}

	/// Resolve a route name to its path.
	pub fn reverse(&self, name: &str) -> Result<String> {
		self.reverser.reverse(name)
	}
}

impl Default for UrlRouter {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Handler for UrlRouter {
	async fn handle(&self, request: Request) -> Result<Response> {
		match self.resolve(request.path()) {
			Some(route) => route.handler_arc().handle(request).await,
			None => Err(Error::NotFound(format!(
				"No route found for {}",
				request.path()
			))),
		}
	}
}
