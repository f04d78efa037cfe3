//! HTTP request and response types plus the handler abstractions.

pub mod middleware;
pub mod request;
pub mod response;

pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{Request, RequestBuilder};
pub use response::Response;
