//! Project management CLI, the equivalent of Django's manage.py.

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;

use website::conf::Settings;
use website::config;
use website::error::Error;
use website::middleware::LoggingMiddleware;
use website::server::HttpServer;
use website::staticfiles::StaticFilesMiddleware;

#[derive(Parser)]
#[command(name = "manage")]
#[command(about = "Website project management interface", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated for more output)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the development server
	Runserver {
		/// Server address (defaults to the configured address)
		#[arg(value_name = "ADDRESS")]
		address: Option<String>,

		/// Serve static files even with debug disabled
		#[arg(long)]
		insecure: bool,
	},

	/// Display all registered URL patterns
	Showurls {
		/// Show only named URLs
		#[arg(long)]
		names: bool,
	},
}

fn init_logging(verbosity: u8) {
	let level = match verbosity {
		0 => tracing::Level::INFO,
		1 => tracing::Level::DEBUG,
		_ => tracing::Level::TRACE,
	};

	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
		.init();
}

async fn run_runserver(address: Option<String>, insecure: bool) -> website::Result<()> {
	let settings = Settings::from_env()?;
	let address = address.unwrap_or_else(|| settings.default_address.clone());
	let addr: SocketAddr = address
		.parse()
		.map_err(|e| Error::ImproperlyConfigured(format!("invalid address '{}': {}", address, e)))?;

	let router = config::urls::url_patterns();
	let mut server = HttpServer::new(router).with_middleware(Arc::new(LoggingMiddleware::new()));
	if settings.debug || insecure {
		server = server.with_middleware(Arc::new(StaticFilesMiddleware::new(
			settings.static_url.clone(),
			settings.static_root.clone(),
		)));
	}

	server.listen(addr).await
}

fn run_showurls(names_only: bool) -> website::Result<()> {
	let router = config::urls::url_patterns();
	for route in router.routes() {
		match &route.name {
			Some(name) => println!(
				"{}  {}",
				style(&route.path).green(),
				style(format!("[name={}]", name)).dim()
			),
			None if names_only => {}
			None => println!("{}", style(&route.path).green()),
		}
	}
	Ok(())
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	init_logging(cli.verbosity);

	let result = match cli.command {
		Commands::Runserver { address, insecure } => run_runserver(address, insecure).await,
		Commands::Showurls { names } => run_showurls(names),
	};

	if let Err(e) = result {
		eprintln!("{} {}", style("Error:").red().bold(), e);
		process::exit(1);
	}

	Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	run().await
}
