use thiserror::Error;

/// Every failure in the pipeline. All of them are terminal, nothing is retried
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// The count is not an integer, an address lacks its prefix, or a request file is malformed
    #[error("{0}")]
    Format(String),
    /// An address is not valid hexadecimal, or is too wide for 64 bits
    #[error("{0}")]
    Address(String),
    /// The start address is not strictly less than the end address
    #[error("start address {start:#X} must be less than end address {end:#X}")]
    Range { start: u64, end: u64 },
    /// Anything else, such as the input stream closing early
    #[error("{0}")]
    Unexpected(String),
}

impl TraceError {
    /// The message the console driver reports on stderr for this error
    pub fn diagnostic(&self) -> String {
        match self {
            TraceError::Format(details) => {
                format!("\nError: Invalid input. Please enter integers and valid hex addresses. Details: {details}")
            }
            TraceError::Address(_) => {
                "Error: Invalid hexadecimal address format. Ensure addresses start with '0x'.".to_string()
            }
            TraceError::Range { .. } => "Error: Start address must be less than end address.".to_string(),
            TraceError::Unexpected(details) => format!("\nAn unexpected error occurred: {details}"),
        }
    }

    /// Whether the input itself was malformed, as opposed to well formed but out of order
    pub fn is_format_error(&self) -> bool {
        matches!(self, TraceError::Format(_) | TraceError::Address(_))
    }
}

impl From<std::io::Error> for TraceError {
    fn from(e: std::io::Error) -> Self {
        TraceError::Unexpected(e.to_string())
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(e: serde_json::Error) -> Self {
        TraceError::Format(format!("Couldn't parse the request: {e}"))
    }
}
