use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use showcase_backend::config::AppConfig;
use showcase_backend::create_pool;
use showcase_backend::geocoding::Geocoder;
use showcase_backend::handlers;
use std::io;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let db = create_pool(&config.database_url)
        .await
        .map_err(|e| io::Error::other(format!("Failed to connect to database: {e}")))?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(|e| io::Error::other(format!("Failed to run migrations: {e}")))?;
        tracing::info!("Migrations applied");
    }

    let db_data = web::Data::new(db);
    let geocoder = web::Data::new(Geocoder::new(
        &config.geocoder_url,
        &config.geocoder_user_agent,
    ));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(geocoder.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
