use colored::Colorize;

use super::OutputFormatter;
use crate::colors::CatppuccinExt;
use crate::whois::WhoisResponse;

/// Labels shown in the summary, in display order.
///
/// Matching is exact: registries disagree on spelling and case, so the common
/// variants are listed side by side.
pub const SUMMARY_FIELDS: &[&str] = &[
    "Domain Name",
    "domain",
    "domain_name",
    "Registrar",
    "registrar",
    "Registration Date",
    "Created",
    "created",
    "Creation Date",
    "Expiration Date",
    "Expires",
    "expires",
    "Registry Expiry Date",
    "Status",
    "status",
    "Domain Status",
    "Name Server",
    "name_server",
    "Name Servers",
    "Organization",
    "org",
    "Organization Name",
    "Country",
    "country",
    "Country Code",
    "Updated Date",
    "updated",
    "Last Updated",
];

pub struct SummaryFormatter {
    use_colors: bool,
    full_response: bool,
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            full_response: false,
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Append the raw response under a heading after the summary lines.
    pub fn with_full_response(mut self, full_response: bool) -> Self {
        self.full_response = full_response;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            text.sky().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_white().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}\n{}", text.lavender().bold(), "=".repeat(text.len()).subtext0())
        } else {
            format!("{}\n{}", text, "=".repeat(text.len()))
        }
    }
}

impl OutputFormatter for SummaryFormatter {
    fn format_whois(&self, response: &WhoisResponse) -> String {
        let record = response.record();
        let mut output = String::new();

        for field in SUMMARY_FIELDS {
            if let Some(value) = record.get(field) {
                output.push_str(&format!("{}: {}\n", self.label(field), self.value(value)));
            }
        }

        if self.full_response {
            output.push('\n');
            output.push_str(&self.header("Full Response:"));
            output.push('\n');
            output.push_str(&response.raw_response);
        }

        output
    }
}
