//! URL table for the pages app.

use crate::apps::pages::views;
use crate::routing::Route;

/// The four routes of the site, in matching order.
///
/// The `/content/*` entries are the endpoints the navigation script
/// fetches. They reuse the page views and exist as their own named rows;
/// the table is kept exactly as written, never deduplicated.
pub fn url_patterns() -> Vec<Route> {
	vec![
		Route::from_handler("/", views::Page1).with_name("page1"),
		Route::from_handler("/page2", views::Page2).with_name("page2"),
		Route::from_handler("/content/", views::Page1).with_name("page1_content"),
		Route::from_handler("/content/page2", views::Page2).with_name("page2_content"),
	]
}
