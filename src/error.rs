use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GenError {
    InputNotFound(PathBuf),
    MalformedInput(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::InputNotFound(path) => write!(f, "input not found: {}", path.display()),
            GenError::MalformedInput(e) => write!(f, "malformed input: {}", e),
            GenError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::InputNotFound(_) => None,
            GenError::MalformedInput(e) => Some(e),
            GenError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::MalformedInput(e)
    }
}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e)
    }
}
