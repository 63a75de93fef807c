use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, WhoisError};
use crate::output::{FormatterOptions, OutputFormat};
use crate::whois::{TcpTransport, Transport, WhoisClient, WHOIS_PORT};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything one invocation needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisOptions {
    pub server: Option<String>,
    pub port: u16,
    pub timeout_secs: u64,
    pub follow_referrals: bool,
    pub format: OutputFormat,
    pub verbose: bool,
    pub quiet: bool,
    pub use_colors: bool,
    /// Accepted on the command line but not written to yet.
    pub output_file: Option<PathBuf>,
}

impl Default for WhoisOptions {
    fn default() -> Self {
        Self {
            server: None,
            port: WHOIS_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            follow_referrals: true,
            format: OutputFormat::Summary,
            verbose: false,
            quiet: false,
            use_colors: false,
            output_file: None,
        }
    }
}

impl WhoisOptions {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(WhoisError::InvalidArgument {
                what: "port number",
                value: self.port.to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(WhoisError::InvalidArgument {
                what: "timeout value",
                value: self.timeout_secs.to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn formatter_options(&self) -> FormatterOptions {
        FormatterOptions {
            verbose: self.verbose,
            use_colors: self.use_colors,
        }
    }

    pub fn client(&self) -> WhoisClient {
        self.client_with(TcpTransport::new())
    }

    pub fn client_with<T: Transport>(&self, transport: T) -> WhoisClient<T> {
        WhoisClient::with_transport(transport)
            .with_server(self.server.clone())
            .with_port(self.port)
            .with_timeout(self.timeout())
            .with_follow_referrals(self.follow_referrals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WhoisOptions::default();
        assert_eq!(options.port, 43);
        assert_eq!(options.timeout(), Duration::from_secs(30));
        assert!(options.follow_referrals);
        assert_eq!(options.format, OutputFormat::Summary);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port_and_timeout() {
        let options = WhoisOptions {
            port: 0,
            ..WhoisOptions::default()
        };
        assert_eq!(
            options.validate().unwrap_err().to_string(),
            "invalid port number: 0"
        );

        let options = WhoisOptions {
            timeout_secs: 0,
            ..WhoisOptions::default()
        };
        assert_eq!(
            options.validate().unwrap_err().to_string(),
            "invalid timeout value: 0"
        );
    }
}
