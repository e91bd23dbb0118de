use crate::backend::Operation;
use reqwest::StatusCode;
use std::fmt;

#[derive(Debug, Clone)]
pub struct BackendError {
    pub operation: Operation,
    pub status: StatusCode,
    pub body: String,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backend error (operation={}, status={}): {}",
            self.operation.as_str(),
            self.status,
            self.body
        )
    }
}

impl std::error::Error for BackendError {}
