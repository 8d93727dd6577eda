use thiserror::Error;

/// Fatal compile failures. Anything recoverable (unknown names, malformed
/// variable references, invalid dates) is logged and compiled around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Structural constraint violated in <{element}>: {message}")]
    StructuralConstraintViolation { element: String, message: String },
}

impl CompileError {
    pub fn malformed(message: impl Into<String>) -> Self {
        CompileError::MalformedInput(message.into())
    }

    pub fn structural(element: impl Into<String>, message: impl Into<String>) -> Self {
        CompileError::StructuralConstraintViolation {
            element: element.into(),
            message: message.into(),
        }
    }
}
