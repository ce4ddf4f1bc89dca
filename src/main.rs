pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::topic;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};
use crate::config::AppConfig;
use crate::shared::api::json_config::{
    custom_json_config, custom_path_config, custom_query_config,
};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{
    DeleteTopicService, GetTopicService, ListTopicsService, RegisterTopicService,
    UpdateTopicService,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{middleware, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e))?;

    Migrator::up(&conn, None)
        .await
        .map_err(std::io::Error::other)?;

    let db_arc = Arc::new(conn);

    // Topic use cases
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let topic = TopicUseCases {
        register: Arc::new(RegisterTopicService::new(
            topic_query.clone(),
            topic_repo.clone(),
        )),
        list: Arc::new(ListTopicsService::new(topic_query.clone())),
        get_single: Arc::new(GetTopicService::new(topic_query)),
        update: Arc::new(UpdateTopicService::new(topic_repo.clone())),
        delete: Arc::new(DeleteTopicService::new(topic_repo)),
    };

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let login_user_use_case = LoginUserUseCase::new(
        UserQueryPostgres::new(Arc::clone(&db_arc)),
        Arc::new(Argon2Hasher::new()),
        Arc::clone(&token_provider_arc),
    );

    let state = AppState {
        topic,
        login_user_use_case: Arc::new(login_user_use_case),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // API docs
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::register_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::list_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
