use std::sync::Arc;

use crate::render::{Renderer, WkhtmltopdfRenderer};
use crate::storage::{ObjectStore, S3Client};

#[derive(Clone)]
pub struct ApiState {
    pub renderer: Arc<dyn Renderer>,
    pub store: Arc<dyn ObjectStore>,
    pub config: Arc<AppConfig>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub s3_bucket_name: String,
    pub wkhtmltopdf_path: String,
    pub temp_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            s3_bucket_name: "documents".to_string(),
            wkhtmltopdf_path: "binary/wkhtmltopdf".to_string(),
            temp_dir: "/tmp".to_string(),
        }
    }
}

impl ApiState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        // Initialize S3
        let store = Arc::new(S3Client::new().await?);

        // Initialize the external renderer
        let renderer = Arc::new(WkhtmltopdfRenderer::new(&config.wkhtmltopdf_path));

        Ok(ApiState {
            renderer,
            store,
            config: Arc::new(config),
        })
    }
}
