use std::sync::Arc;

use auth::TokenService;
use chat_server::config::Config;
use chat_server::domain::message::service::MessageService;
use chat_server::domain::user::service::UserService;
use chat_server::inbound::http::router::create_router;
use chat_server::outbound::db;
use chat_server::outbound::repositories::SqliteMessageRepository;
use chat_server::outbound::repositories::SqliteUserRepository;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "chat-server",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pool = db::connect(&config.database.url).await?;
    tracing::info!(database = "sqlite", "Database ready");

    let token_service = Arc::new(TokenService::with_lifetime(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    ));
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let message_repository = Arc::new(SqliteMessageRepository::new(pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let message_service = Arc::new(MessageService::new(message_repository, user_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, message_service, token_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
