use std::net::SocketAddr;
use std::sync::Arc;

use polls::adapters::auth::{JwtSessionValidator, TracingAuthObserver};
use polls::adapters::http::{api_router, ApiHandlers, AuthState, PollPorts, RouterSettings};
use polls::adapters::postgres::{
    run_migrations, PostgresChoiceRepository, PostgresPollReader, PostgresQuestionRepository,
    PostgresVoteRepository,
};
use polls::config::AppConfig;
use polls::logging::{init_tracing, LogFormat};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(
        &config.server.log_level,
        LogFormat::for_production(config.is_production()),
    )?;

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        return Err(e.into());
    }

    tracing::info!(
        environment = ?config.server.environment,
        latest_limit = config.polls.latest_limit,
        "Starting polls service"
    );

    let pool = config.database.connect().await?;

    if config.database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let mut jwt = JwtSessionValidator::new(&config.auth.jwt_secret);
    if let Some(issuer) = &config.auth.jwt_issuer {
        jwt = jwt.with_issuer(issuer.clone());
    }
    if let Some(audience) = &config.auth.jwt_audience {
        jwt = jwt.with_audience(audience.clone());
    }
    let validator: AuthState = Arc::new(jwt);

    let ports = PollPorts {
        questions: Arc::new(PostgresQuestionRepository::new(pool.clone())),
        choices: Arc::new(PostgresChoiceRepository::new(pool.clone())),
        votes: Arc::new(PostgresVoteRepository::new(pool.clone())),
        reader: Arc::new(PostgresPollReader::new(pool.clone())),
    };
    let handlers = ApiHandlers::from_ports(
        ports,
        validator.clone(),
        Arc::new(TracingAuthObserver::new()),
        config.polls.latest_limit,
    );

    let settings = RouterSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.allowed_origins(),
    };
    let app = api_router(handlers, validator, &settings);

    let addr = config.server.listen_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
