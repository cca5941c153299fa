use serde_json::Value as JsonValue;

pub type AfmResult<T> = Result<T, AfmError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AfmError {
    #[error("the measure definition is not supported: {0}")]
    UnsupportedMeasureDefinition(JsonValue),

    #[error("local reference `{0}` cannot address a catalog object")]
    UnexpectedLocalReference(String),

    #[error("measure `{measure}` cannot be filtered by a measure value filter")]
    UnsupportedMeasureFilter { measure: String },
}
