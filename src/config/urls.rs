//! Project URL configuration.

use std::sync::Arc;

use crate::apps::pages;
use crate::routing::UrlRouter;

/// Build the project router from the app URL tables.
///
/// This is the single composition point for every route in the site.
pub fn url_patterns() -> Arc<UrlRouter> {
	let mut router = UrlRouter::new();
	for route in pages::urls::url_patterns() {
		router.add_route(route);
	}
	Arc::new(router)
}
