use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use pdf_publisher::api::state::AppConfig;
use pdf_publisher::api::{configure_routes, ApiState};
use std::env;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    tracing::info!("Starting PDF Publisher API");

    // Load configuration
    let config = load_config()?;

    // Initialize application state
    let state = web::Data::new(ApiState::new(config).await?);

    // Get server settings
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;

    tracing::info!("Starting server on {}:{}", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let config = AppConfig {
        s3_bucket_name: env::var("S3_BUCKET_NAME")
            .context("S3_BUCKET_NAME must be set")?,
        wkhtmltopdf_path: env::var("WKHTMLTOPDF_PATH")
            .unwrap_or_else(|_| "binary/wkhtmltopdf".to_string()),
        temp_dir: env::var("TEMP_DIR")
            .unwrap_or_else(|_| "/tmp".to_string()),
    };

    Ok(config)
}
