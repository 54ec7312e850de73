use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use entity::user::UserRole;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    model::user::CreateUserParams,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the application accesses the database.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Creates (or migrates) the session table in the same SQLite database and
/// configures a 7-day inactivity expiry.
pub async fn session_layer(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());

    store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the CORS layer for the browser client.
///
/// Mirrors the configuration the clients expect: the configured origin with
/// credentials, the four verbs the API uses, and the content-type and
/// authorization headers.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

/// Creates the bootstrap admin account when the database has no admin.
///
/// Without an admin user the booking management endpoints are unreachable,
/// so on a fresh database one is created from `ADMIN_EMAIL` /
/// `ADMIN_PASSWORD`. If those are not configured a warning is logged and
/// startup continues.
pub async fn ensure_admin_account(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin user exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
             admin endpoints will be unreachable"
        );
        return Ok(());
    };

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    user_repo
        .create(CreateUserParams {
            name: "Admin".to_string(),
            email: email.clone(),
            password_hash,
            role: UserRole::Admin,
        })
        .await?;

    tracing::info!("Created bootstrap admin account for {}", email);

    Ok(())
}
