use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarcryError {
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Endpoint error: {0}")]
    Endpoint(String),

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WarcryError>;
