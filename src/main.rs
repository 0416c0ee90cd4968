mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, routing::get};
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher, user_repository::PostgresUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "user_registry=debug,axum=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    let user_repository = PostgresUserRepository::new(db);
    let password_hasher = Argon2PasswordHasher::new();
    let register_user_usecase = RegisterUserUsecase::new(user_repository, password_hasher);

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", create_user_router(register_user_usecase));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
