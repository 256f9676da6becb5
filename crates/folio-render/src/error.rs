//! Error types for folio-render

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document: {0}")]
    Document(#[from] folio_doctree::DocError),

    #[error("transform error: {0}")]
    Transform(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
