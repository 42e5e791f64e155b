use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    #[error("Image processing error: {0}")]
    ImageProcessingError(String),
    #[error("MRZ extraction error: {0}")]
    MrzExtractionError(String),
    #[error("Unrecognized MRZ format: {0}")]
    UnrecognizedFormat(String),
    #[error("Structural error: field '{field}' lies outside MRZ line {line}")]
    StructuralError { field: &'static str, line: usize },
    #[error("IO error: {0}")]
    IoError(String),
}
