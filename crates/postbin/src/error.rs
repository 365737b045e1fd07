use postbin_core::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{node}: {message} {description}")]
    Validation {
        node: String,
        message: String,
        description: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("PostBin returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid query parameter '{0}', expected KEY=VALUE")]
    InvalidQuery(String),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation {
            node: err.node.to_string(),
            message: err.message,
            description: err.description,
        }
    }
}
