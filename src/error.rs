use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown case style: {0}")]
    UnknownStyle(String),

    #[error("invalid acronym '{acronym}': {reason}")]
    InvalidAcronym { acronym: String, reason: String },

    #[error("failed to build acronym matcher: {0}")]
    Matcher(String),
}

pub type Result<T> = std::result::Result<T, Error>;
