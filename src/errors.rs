use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Selection(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Logging(String),
}

impl AppError {
    /// True for failures reading or writing the backing file.
    pub fn is_io(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Csv(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Validation(format!("Invalid validation pattern: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Selection(msg) => {
                write!(f, "No contact selected: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "I/O error while reading or writing the address book: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Could not render contacts as JSON: {}", e)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Logging(msg) => {
                write!(f, "Logging setup failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Csv(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::ParseInt(e) => Some(e),
            _ => None,
        }
    }
}
