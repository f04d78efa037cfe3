//! URL routing: the route table, dispatch, and name-based reversal.

pub mod reverse;
pub mod route;
pub mod router;

pub use reverse::UrlReverser;
pub use route::Route;
pub use router::UrlRouter;
