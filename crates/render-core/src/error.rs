use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Could not decode image '{path}': {message}")]
    Image { path: String, message: String },
    #[error("Document was never started with begin_document")]
    NotStarted,
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl RenderError {
    pub fn image(path: &std::path::Path, err: image::ImageError) -> Self {
        RenderError::Image {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
