use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{
    http::Method, listener::TcpListener, middleware::Cors, EndpointExt, Route, Server,
};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use userstash_backend::api::{AccountApi, HealthApi};
use userstash_backend::config::{init_logging, BootstrapSettings};
use userstash_backend::services::{AccountService, BcryptHasher};
use userstash_backend::stores::{AccountStore, SeaOrmAccountStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Invalid bootstrap configuration");

    // Connect to database
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url);

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    // Wire the account service: store and hasher are injected explicitly,
    // no container involved
    let account_store: Arc<dyn AccountStore> = Arc::new(SeaOrmAccountStore::new(db.clone()));
    let password_hasher = Arc::new(BcryptHasher::new());
    let account_service = Arc::new(AccountService::new(account_store, password_hasher));

    let account_api = AccountApi::new(account_service);

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new((HealthApi, account_api), "Userstash API", "1.0.0")
        .server(format!("http://localhost:{}", settings.server_port));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    let cors = Cors::new()
        .allow_origin(settings.cors_origin.as_str())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_credentials(true);

    // Compose routes: API at the root, Swagger UI under /swagger
    let app = Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(cors);

    tracing::info!("Starting server on http://{}", settings.bind_address());
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.server_port
    );

    Server::new(TcpListener::bind(settings.bind_address()))
        .run(app)
        .await
}
