use std::fmt;

#[derive(Debug)]
pub enum ReaderError {
    BadOption(String),
    BadConfig(String),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReaderError::BadOption(token) => {
                write!(f, "Invalid option '{}', expected key=value", token)
            }
            ReaderError::BadConfig(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ReaderError {}
