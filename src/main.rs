use std::{env, sync::Arc};

use config::Config;
use repositories::PostgresRepo;
use routes::create_routes;
use services::posts::PostsService;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod views;

#[derive(Clone)]
pub struct AppState {
    pub posts_service: PostsService,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("Connection to the database is successful!");
            pool
        }
        Err(err) => {
            error!("Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        error!("Failed to run migrations: {:?}", err);
        std::process::exit(1);
    }

    let repo = PostgresRepo::new(pool);

    let app_state = AppState {
        posts_service: PostsService::new(Arc::new(repo)),
    };

    let app = create_routes(Arc::new(app_state));

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let listener = tokio::net::TcpListener::bind(format!("[::]:{port}"))
        .await
        .unwrap();
    info!("Listening on port {port}");
    axum::serve(listener, app).await.unwrap();
}
