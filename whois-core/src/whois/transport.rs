use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{Result, WhoisError};

pub const WHOIS_PORT: u16 = 43;
pub const MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// One request/response exchange with a WHOIS server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `text` to `server:port` and returns everything the server wrote
    /// before closing the connection.
    async fn query(&self, server: &str, port: u16, text: &str, limit: Duration) -> Result<String>;
}

/// Plain TCP transport. Every blocking step is bounded by the caller's timeout.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    max_response_size: usize,
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TcpTransport {
    pub fn new() -> Self {
        Self {
            max_response_size: MAX_RESPONSE_SIZE,
        }
    }

    pub fn with_max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }

    async fn resolve(&self, server: &str, port: u16, limit: Duration) -> Result<SocketAddr> {
        let resolution_failed = || WhoisError::Resolution {
            server: server.to_string(),
        };

        let addrs: Vec<SocketAddr> = timeout(limit, tokio::net::lookup_host((server, port)))
            .await
            .map_err(|_| resolution_failed())?
            .map_err(|_| resolution_failed())?
            .collect();

        // IPv4 first, like most registries' published records expect.
        addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(resolution_failed)
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn query(&self, server: &str, port: u16, text: &str, limit: Duration) -> Result<String> {
        let addr = self.resolve(server, port, limit).await?;
        debug!(server = %server, addr = %addr, "Resolved WHOIS server");

        let mut stream = timeout(limit, TcpStream::connect(addr))
            .await
            .map_err(|_| WhoisError::connect(server, "connection timed out"))?
            .map_err(|e| WhoisError::connect(server, e))?;

        // Send query with CRLF
        let query_bytes = format!("{}\r\n", text);
        timeout(limit, stream.write_all(query_bytes.as_bytes()))
            .await
            .map_err(|_| WhoisError::send(server, "write timed out"))?
            .map_err(|e| WhoisError::send(server, e))?;

        let mut response = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            match timeout(limit, stream.read(&mut buf)).await {
                Ok(Ok(0)) => break, // EOF
                Ok(Ok(n)) => {
                    response.extend_from_slice(&buf[..n]);
                    if response.len() > self.max_response_size {
                        return Err(WhoisError::ResponseTooLarge {
                            server: server.to_string(),
                            limit: self.max_response_size,
                        });
                    }
                }
                Ok(Err(e)) => return Err(WhoisError::receive(server, e)),
                Err(_) => {
                    // A server that stops talking but never closes still gave us an answer.
                    if !response.is_empty() {
                        debug!(server = %server, "Read timed out, keeping partial response");
                        break;
                    }
                    return Err(WhoisError::receive(server, "read timed out"));
                }
            }
        }

        debug!(server = %server, bytes = response.len(), "Received WHOIS response");

        if response.is_empty() {
            return Err(WhoisError::EmptyResponse(server.to_string()));
        }

        Ok(decode(response))
    }
}

/// UTF-8 when valid, Latin-1 otherwise.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| e.into_bytes().iter().map(|&c| c as char).collect())
}
