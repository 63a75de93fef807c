use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static IPV4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("valid IPv4 pattern"));

// Full eight-group form only; `::` compression is not recognised.
static IPV6_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").expect("valid IPv6 pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Domain,
    IpAddress,
}

/// Classifies a raw query string.
///
/// Octets are not range-checked, so `999.1.1.1` still counts as an address.
pub fn classify(query: &str) -> QueryKind {
    if IPV4_PATTERN.is_match(query) || IPV6_PATTERN.is_match(query) {
        QueryKind::IpAddress
    } else {
        QueryKind::Domain
    }
}

/// A query as typed by the user, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    kind: QueryKind,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn is_ip_address(&self) -> bool {
        self.kind == QueryKind::IpAddress
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
