use invoicer_model::ValidationError;
use invoicer_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for the invoice generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid invoice: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid form input: {0}")]
    Input(#[from] serde_json::Error),
}
