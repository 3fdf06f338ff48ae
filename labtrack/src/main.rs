use clap::Parser;
use labtrack::{Application, Config, config, telemetry};

/// Wait for a shutdown signal (SIGHUP, SIGINT, SIGTERM, or SIGQUIT on unix;
/// Ctrl+C elsewhere)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        let mut hangup = signal(SignalKind::hangup()).expect("Failed to install SIGHUP handler");
        let mut terminate = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        let mut quit = signal(SignalKind::quit()).expect("Failed to install SIGQUIT handler");

        tokio::select! {
            _ = hangup.recv() => {},
            _ = terminate.recv() => {},
            _ = quit.recv() => {},
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received termination signal, shutting down gracefully...");
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env file can pre-populate the DB_* settings
    dotenvy::dotenv().ok();

    // Parse CLI args
    let args = config::Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    // Initialize structured logging
    telemetry::init_telemetry()?;

    tracing::debug!("{:?}", args);

    // Run the application with graceful shutdown on termination signals
    let shutdown = shutdown_signal();
    Application::new(config).await?.serve(shutdown).await
}
