use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Vectorization failed: {0}")]
    Vectorize(String),
    #[error("Invalid tracer output: {0}")]
    Svg(String),
    #[error("Image is empty ({0}x{1})")]
    EmptyImage(u32, u32),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, TraceError>;
