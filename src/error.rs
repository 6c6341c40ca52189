use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    QueueFull,
    QueueEmpty,
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub error_type: ErrorType,
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}; {}", self.error_type, self.message)
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn queue_full(message: &str) -> Self {
        Self {
            error_type: ErrorType::QueueFull,
            message: message.to_string(),
        }
    }

    pub fn queue_empty() -> Self {
        Self {
            error_type: ErrorType::QueueEmpty,
            message: "".to_string(),
        }
    }
}
