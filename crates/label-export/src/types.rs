use label_layout::LayoutError;
use label_trace::TraceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No labels to export")]
    EmptyInput,
    #[error("Nothing was generated")]
    NothingGenerated,
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),
    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
