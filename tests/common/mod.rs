//! Shared helpers for integration tests.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use website::http::Handler;
use website::server::HttpServer;

/// Spawn a server for the given handler on a random local port.
///
/// Returns the base URL and the join handle of the accept loop. The loop
/// stops when the handle is dropped with the test runtime.
pub async fn spawn_test_server(handler: Arc<dyn Handler>) -> (String, JoinHandle<()>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	let url = format!("http://{}", addr);

	let handle = tokio::spawn(async move {
		loop {
			match listener.accept().await {
				Ok((stream, remote_addr)) => {
					let handler = handler.clone();
					tokio::spawn(async move {
						let _ =
							HttpServer::handle_connection(stream, remote_addr, handler).await;
					});
				}
				Err(_) => break,
			}
		}
	});

	(url, handle)
}
