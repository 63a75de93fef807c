use std::collections::BTreeMap;

use serde::Serialize;

use super::OutputFormatter;
use crate::whois::WhoisResponse;

#[derive(Serialize)]
struct WhoisDocument<'a> {
    query: &'a str,
    server: &'a str,
    data: BTreeMap<&'a str, &'a str>,
    raw_response: &'a str,
}

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_whois(&self, response: &WhoisResponse) -> String {
        let record = response.record();
        let document = WhoisDocument {
            query: &response.query,
            server: &response.server,
            data: record.iter().collect(),
            raw_response: &response.raw_response,
        };
        let mut output = self.to_json(&document);
        output.push('\n');
        output
    }
}
