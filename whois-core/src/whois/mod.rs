mod client;
mod parser;
mod query;
mod servers;
mod transport;

pub use client::{extract_referral, WhoisClient};
pub use parser::{ParsedRecord, WhoisResponse};
pub use query::{classify, Query, QueryKind};
pub use servers::{
    get_tld, get_whois_server, select_server, FALLBACK_SERVER, IP_REGISTRIES, WHOIS_SERVERS,
};
pub use transport::{TcpTransport, Transport, MAX_RESPONSE_SIZE, WHOIS_PORT};

#[cfg(test)]
pub(crate) use transport::mock;
