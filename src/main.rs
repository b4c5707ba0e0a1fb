use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use trip_server::config::AppConfig;
use trip_server::{logging, routes, startup};

#[derive(Parser, Debug)]
#[command(name = "trip-server")]
#[command(about = "Trip catalogue and client registration API")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration from specified file or use defaults
    let (mut app_config, using_defaults) =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            (AppConfig::default_config(), true)
        } else {
            let config = AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?;
            (config, false)
        };

    logging::init_tracing(&app_config.logging.level);

    if using_defaults {
        println!("⚠️  No config.yaml found, using default configuration:");
        println!("   - In-memory SQLite database with sample trips");
        println!("   - Routes under {}", app_config.server.base_path);
        println!("   🚀 Perfect for development and testing!\n");
    }

    // Override with command line arguments if provided
    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    tracing::info!(
        host = %app_config.server.host,
        port = app_config.server.port,
        database = %app_config.database.db_type,
        "configuration loaded"
    );

    let backend = startup::initialize_backend(&app_config).await?;
    let app_config = Arc::new(app_config);
    let app = routes::build_router(backend, app_config.clone());

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        tracing::warn!(
            host = %app_config.server.host,
            "invalid host address, using 127.0.0.1"
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));
    println!("🚀 Trip server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
