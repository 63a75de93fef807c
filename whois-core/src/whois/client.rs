use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument};

use super::parser::WhoisResponse;
use super::query::Query;
use super::servers::select_server;
use super::transport::{TcpTransport, Transport, WHOIS_PORT};
use crate::error::Result;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Checked in order; the first match wins. The host must sit on the same line
// as its label, so an empty `Registrar WHOIS Server:` never swallows the next
// line's text. The bare labels need a word boundary so `rwhois://host` is not
// read as `whois: //host`.
static REFERRAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)ReferralServer:[ \t]*whois://(\S+)",
        r"(?i)Whois Server:[ \t]*(\S+)",
        r"(?i)\bwhois:[ \t]*(\S+)",
        r"(?i)\brefer:[ \t]*(\S+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

#[derive(Debug, Clone)]
pub struct WhoisClient<T = TcpTransport> {
    transport: T,
    server: Option<String>,
    port: u16,
    timeout: Duration,
    follow_referrals: bool,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisClient {
    pub fn new() -> Self {
        Self::with_transport(TcpTransport::new())
    }
}

impl<T: Transport> WhoisClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            server: None,
            port: WHOIS_PORT,
            timeout: DEFAULT_TIMEOUT,
            follow_referrals: true,
        }
    }

    /// Always query `server`, skipping TLD and registry selection.
    pub fn with_server(mut self, server: Option<String>) -> Self {
        self.server = server;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_follow_referrals(mut self, follow: bool) -> Self {
        self.follow_referrals = follow;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn select_server(&self, query: &Query) -> String {
        select_server(query, self.server.as_deref())
    }

    /// Queries the selected server and, for domains, at most one referral.
    ///
    /// When a referral is followed its answer replaces the first one entirely.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn lookup(&self, query: &Query) -> Result<WhoisResponse> {
        let whois_server = self.select_server(query);
        let raw_response = self.query_server(query, &whois_server).await?;

        if self.follow_referrals && !query.is_ip_address() {
            if let Some(referral) = extract_referral(&raw_response) {
                if !referral.eq_ignore_ascii_case(&whois_server) {
                    info!(referral = %referral, "Following referral");
                    let raw_response = self.query_server(query, &referral).await?;
                    return Ok(WhoisResponse::new(query.as_str(), &referral, raw_response));
                }
                debug!(referral = %referral, "Referral points back at the same server");
            }
        }

        Ok(WhoisResponse::new(query.as_str(), &whois_server, raw_response))
    }

    async fn query_server(&self, query: &Query, server: &str) -> Result<String> {
        info!(server = %server, port = self.port, "Querying WHOIS server");
        self.transport
            .query(server, self.port, query.as_str(), self.timeout)
            .await
    }
}

/// Finds the more specific server a response points to, if any.
pub fn extract_referral(response: &str) -> Option<String> {
    REFERRAL_PATTERNS.iter().find_map(|re| {
        re.captures(response)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}
