pub mod wkhtmltopdf;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub use wkhtmltopdf::WkhtmltopdfRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to launch renderer at {path}: {source}")]
    Spawn {
        path: String,
        source: std::io::Error,
    },
    #[error("renderer exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability for turning an HTML document into a PDF file on local disk.
///
/// The single production implementation shells out to wkhtmltopdf; tests
/// substitute a fake that writes a stub file.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, html: &str, output: &Path) -> Result<(), RenderError>;
}
