use insight_afm::AfmError;

/// Failure reported by the analytical backend collaborator.
///
/// The adaptation pipeline never retries; retry policy belongs to the backend implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend transport error: {0}")]
    Transport(String),

    #[error("backend rejected the request: {0}")]
    Validation(String),

    #[error("object not found: {0}")]
    NotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VisualizationError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Conversion(#[from] AfmError),
}

pub type VisualizationResult<T> = Result<T, VisualizationError>;
