use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCountError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Word \"{0}\" is missing from the count map")]
    MissingWord(String),
}

impl From<std::io::Error> for WordCountError {
    fn from(err: std::io::Error) -> Self {
        WordCountError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WordCountError>;
