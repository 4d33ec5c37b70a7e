use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{RenderError, Renderer};

/// Renders HTML by shelling out to the wkhtmltopdf binary.
///
/// The document is piped over stdin (the "-" input argument) and the binary
/// writes the PDF straight to the requested output path. No rendering
/// options are passed.
pub struct WkhtmltopdfRenderer {
    binary: PathBuf,
}

impl WkhtmltopdfRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        WkhtmltopdfRenderer {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl Renderer for WkhtmltopdfRenderer {
    async fn render(&self, html: &str, output: &Path) -> Result<(), RenderError> {
        let mut child = Command::new(&self.binary)
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RenderError::Spawn {
                path: self.binary.display().to_string(),
                source: e,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(html.as_bytes()).await?;
            // dropped here so wkhtmltopdf sees EOF on its input
        }

        let out = child.wait_with_output().await?;

        if !out.status.success() {
            return Err(RenderError::Failed {
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
