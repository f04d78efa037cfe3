//! URL reversal: look up a route's path by its symbolic name.
//!
//! Templates and management commands refer to routes by name so the path
//! literals live in exactly one place, the URL table.

use std::collections::HashMap;

use crate::error::{Error, Result};

#[derive(Debug, Default, Clone)]
pub struct UrlReverser {
	routes: HashMap<String, String>,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self {
			routes: HashMap::new(),
		}
	}

	/// Register a named path. The first registration of a name wins.
	pub fn register(&mut self, name: impl Into<String>, path: impl Into<String>) {
		self.routes.entry(name.into()).or_insert_with(|| path.into());
	}

	/// Resolve a route name to its path.
	pub fn reverse(&self, name: &str) -> Result<String> {
		self.routes
			.get(name)
			.cloned()
			.ok_or_else(|| Error::NotFound(format!("Reverse for '{}' not found", name)))
	}

	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	/// All registered names, sorted for stable output.
	pub fn route_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.routes.keys().cloned().collect();
		names.sort();
		names
	}
}
