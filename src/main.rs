use std::sync::Arc;

use clap::Parser;
use quizbank::{db::Db, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// MongoDB connection string.
    #[arg(long, env = "MONGO_URI")]
    mongo_uri: String,

    /// Database name. Defaults to the one in the connection string.
    #[arg(long, env = "MONGO_DB")]
    database: Option<String>,

    /// The host to bind to.
    #[arg(long, env, default_value = names::DEFAULT_HOST)]
    host: String,

    /// The port to listen on.
    #[arg(short, long, env, default_value_t = names::DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quizbank=debug,tower_http=debug,axum=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let db = Db::connect(&args.mongo_uri, args.database.as_deref()).await?;
    let app = quizbank::router(AppState {
        db: Arc::new(db.clone()),
    });

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!("server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
