//! Page views.
//!
//! Each view renders a fixed template. The only request-dependent decision
//! is the base template: asynchronous requests get the bare fragment base
//! so the client can swap the content block in place.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Handler, Request, Response};
use crate::shortcuts::render;

/// Base template used for asynchronous partial requests.
pub const BASE_AJAX: &str = "base_ajax.html";

pub struct Page1;

#[async_trait]
impl Handler for Page1 {
	async fn handle(&self, request: Request) -> Result<Response> {
		let mut context = HashMap::new();
		if request.is_ajax() {
			context.insert("base", BASE_AJAX);
		}
		render(&request, "page1.html", context)
	}
}

pub struct Page2;

#[async_trait]
impl Handler for Page2 {
	async fn handle(&self, request: Request) -> Result<Response> {
		let mut context = HashMap::new();
		if request.is_ajax() {
			context.insert("base", BASE_AJAX);
		}
		render(&request, "page2.html", context)
	}
}
