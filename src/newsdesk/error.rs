use thiserror::Error;

/// A required authoring field was left empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter a headline.")]
    MissingHeadline,

    #[error("Please enter a reporter name.")]
    MissingReporter,

    #[error("Please write the article body.")]
    MissingBody,
}

#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Storage full: {needed} bytes needed, quota is {quota} bytes")]
    StorageFull { needed: usize, quota: usize },

    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("No article id left after {0}")]
    IdsExhausted(u64),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
