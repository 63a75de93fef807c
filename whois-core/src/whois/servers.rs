use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::query::Query;

/// Server used when a TLD has no entry in the table.
pub const FALLBACK_SERVER: &str = "whois.internic.net";

/// Regional internet registries, in the order they are consulted.
///
/// Only the first entry is queried today; the other registries are reached
/// through the referral lines ARIN returns.
pub const IP_REGISTRIES: [&str; 5] = [
    "whois.arin.net",
    "whois.ripe.net",
    "whois.apnic.net",
    "whois.lacnic.net",
    "whois.afrinic.net",
];

const TLD_SERVERS: &[(&str, &str)] = &[
    // Generic
    ("com", "whois.verisign-grs.com"),
    ("net", "whois.verisign-grs.com"),
    ("org", "whois.pir.org"),
    ("info", "whois.afilias.net"),
    ("biz", "whois.neulevel.biz"),
    ("edu", "whois.educause.edu"),
    ("gov", "whois.dotgov.gov"),
    ("mil", "whois.nic.mil"),
    ("int", "whois.iana.org"),
    // Country code
    ("us", "whois.nic.us"),
    ("uk", "whois.nic.uk"),
    ("de", "whois.denic.de"),
    ("fr", "whois.afnic.fr"),
    ("jp", "whois.jprs.jp"),
    ("cn", "whois.cnnic.cn"),
    ("ru", "whois.tcinet.ru"),
    ("br", "whois.registro.br"),
    ("au", "whois.auda.org.au"),
    ("ca", "whois.cira.ca"),
];

pub static WHOIS_SERVERS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TLD_SERVERS.iter().copied().collect());

pub fn get_whois_server(tld: &str) -> Option<&'static str> {
    WHOIS_SERVERS.get(tld.to_lowercase().as_str()).copied()
}

/// Returns the text after the last dot, or `""` when there is none.
pub fn get_tld(domain: &str) -> &str {
    match domain.rfind('.') {
        Some(pos) => &domain[pos + 1..],
        None => "",
    }
}

/// Picks the server to ask first.
///
/// A configured server always wins. IP queries go to the first regional
/// registry, domains to their TLD's registry or [`FALLBACK_SERVER`].
pub fn select_server(query: &Query, configured: Option<&str>) -> String {
    if let Some(server) = configured.filter(|s| !s.is_empty()) {
        return server.to_string();
    }

    if query.is_ip_address() {
        return IP_REGISTRIES[0].to_string();
    }

    get_whois_server(get_tld(query.as_str()))
        .unwrap_or(FALLBACK_SERVER)
        .to_string()
}
