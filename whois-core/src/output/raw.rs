use super::OutputFormatter;
use crate::whois::WhoisResponse;

/// Writes the server's answer untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl OutputFormatter for RawFormatter {
    fn format_whois(&self, response: &WhoisResponse) -> String {
        response.raw_response.clone()
    }
}
