//! Site settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable reader with prefix support.
#[derive(Debug, Clone, Default)]
pub struct Env {
	prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self { prefix: None }
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	pub fn str_with_default(&self, key: &str, default: &str) -> String {
		env::var(self.key_name(key)).unwrap_or_else(|_| default.to_string())
	}

	pub fn bool_with_default(&self, key: &str, default: bool) -> Result<bool> {
		let full_key = self.key_name(key);
		match env::var(&full_key) {
			Ok(value) => parse_bool(&value).ok_or_else(|| {
				Error::ImproperlyConfigured(format!(
					"{} must be a boolean, got '{}'",
					full_key, value
				))
			}),
			Err(_) => Ok(default),
		}
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" | "" => Some(false),
		_ => None,
	}
}

/// Settings the site reads at startup.
///
/// All values have defaults; environment variables with the `WEBSITE_`
/// prefix override them.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Development mode. Enables static file serving in `runserver`.
	pub debug: bool,
	/// Address `runserver` binds when none is given on the command line.
	pub default_address: String,
	/// URL prefix static files are served under.
	pub static_url: String,
	/// Directory static files are served from.
	pub static_root: PathBuf,
}

impl Settings {
	pub fn from_env() -> Result<Self> {
		let env = Env::new().with_prefix("WEBSITE_");
		Ok(Self {
			debug: env.bool_with_default("DEBUG", true)?,
			default_address: env.str_with_default("ADDRESS", "127.0.0.1:8000"),
			static_url: env.str_with_default("STATIC_URL", "/static/"),
			static_root: PathBuf::from(env.str_with_default("STATIC_ROOT", "static")),
		})
	}
}
