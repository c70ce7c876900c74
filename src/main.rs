use axum::routing::post;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mcp_time_server::handlers::mcp_handler;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TLS certificate file
    #[arg(long)]
    tls_cert: Option<PathBuf>,
    /// Path to the TLS key file
    #[arg(long)]
    tls_key: Option<PathBuf>,
    /// Port to listen on
    #[arg(long, env = "MCP_TIME_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr only; the protocol owns its own stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Routes for both /mcp and /mcp/
    let app = Router::new()
        .route("/mcp", post(mcp_handler))
        .route("/mcp/", post(mcp_handler));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    match (args.tls_cert, args.tls_key) {
        (Some(cert_path), Some(key_path)) => {
            tracing::info!("MCP time server listening on https://{addr}");
            let config = RustlsConfig::from_pem_file(cert_path, key_path)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("failed to load TLS certificate/key: {e}");
                    std::process::exit(1);
                });
            axum_server::bind_rustls(addr, config)
                .serve(app.into_make_service())
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("failed to start HTTPS server: {e}");
                    std::process::exit(1);
                });
        }
        (None, None) => {
            tracing::info!("MCP time server listening on http://{addr}");
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!("failed to bind to address {addr}: {e}");
                    std::process::exit(1);
                });
            axum::serve(listener, app).await.unwrap_or_else(|e| {
                tracing::error!("failed to start HTTP server: {e}");
                std::process::exit(1);
            });
        }
        _ => {
            tracing::error!(
                "both --tls-cert and --tls-key must be provided together to enable TLS"
            );
            std::process::exit(1);
        }
    }
}
