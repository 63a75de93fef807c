use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("Failed to resolve WHOIS server: {server}")]
    Resolution { server: String },

    #[error("Failed to connect to WHOIS server: {server} ({reason})")]
    Connect { server: String, reason: String },

    #[error("Failed to send query to {server}: {reason}")]
    Send { server: String, reason: String },

    #[error("Failed to read response from {server}: {reason}")]
    Receive { server: String, reason: String },

    #[error("No response from WHOIS server: {0}")]
    EmptyResponse(String),

    #[error("Response from {server} exceeded {limit} bytes")]
    ResponseTooLarge { server: String, limit: usize },

    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
}

impl WhoisError {
    pub(crate) fn connect(server: &str, reason: impl ToString) -> Self {
        WhoisError::Connect {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn send(server: &str, reason: impl ToString) -> Self {
        WhoisError::Send {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn receive(server: &str, reason: impl ToString) -> Self {
        WhoisError::Receive {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WhoisError>;
