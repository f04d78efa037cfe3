//! Two-page website with asynchronous partial page navigation.
//!
//! The same views serve every page two ways: as a complete document, and
//! as a bare content fragment for the bundled navigation script, which
//! fetches the `/content` endpoints with the `X-Requested-With` marker
//! header. Framework-flavored plumbing (routing, templates, server loop,
//! middleware, settings) lives alongside the site modules.

pub mod apps;
pub mod conf;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod shortcuts;
pub mod staticfiles;
pub mod templates;

pub use error::{Error, Result};
pub use http::{Handler, Request, Response};
pub use routing::{Route, UrlRouter};
pub use server::HttpServer;
