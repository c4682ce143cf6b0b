//! Pixicon Daemon - serve identicons over HTTP
//!
//! Owns the listener and the middleware; the request semantics live in the
//! library.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;

use pixicon_core::server;

#[derive(Parser)]
#[command(name = "pixicond")]
#[command(about = "Serve deterministic identicons over HTTP")]
struct Args {
    /// Host to run the server on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Enable debug-level request logging
    #[arg(short, long)]
    verbose: bool,
}

/// Addresses bound to the unspecified IP are advertised via loopback.
fn display_addr(addr: SocketAddr) -> SocketAddr {
    if addr.ip().is_unspecified() {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), addr.port())
    } else {
        addr
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "pixicond=debug,pixicon_core=debug,tower_http=debug"
    } else {
        "pixicond=info,pixicon_core=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| filter.to_string()))
        .init();

    let app = server::router().layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("starting server on http://{}", display_addr(listener.local_addr()?));

    axum::serve(listener, app).await?;

    Ok(())
}
