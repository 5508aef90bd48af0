use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Unknown status value '{0}'")]
    UnknownStatusValue(String),

    #[error("You must supply at least one status value")]
    EmptyStatusSet,

    #[error("Unknown stored status code '{0}'")]
    UnknownStoredCode(String),

    #[error("Duplicate status code '{0}'")]
    DuplicateCode(String),

    #[error("Status codes cannot be blank")]
    BlankCode,

    #[error("Status name for code '{0}' cannot be blank")]
    BlankName(String),

    #[error("Status code '{0}' has leading or trailing whitespace")]
    PaddedCode(String),

    #[error("Status name '{0}' has leading or trailing whitespace")]
    PaddedName(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StatusError>;
