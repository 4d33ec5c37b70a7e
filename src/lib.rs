pub mod api;
pub mod render;
pub mod storage;

// Re-export commonly used types
pub use render::{Renderer, WkhtmltopdfRenderer};
pub use storage::{ObjectStore, S3Client};
