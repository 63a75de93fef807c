use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The final answer to a query: which server produced it and what it said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisResponse {
    pub query: String,
    pub server: String,
    pub raw_response: String,
}

impl WhoisResponse {
    pub fn new(query: &str, server: &str, raw: String) -> Self {
        WhoisResponse {
            query: query.to_string(),
            server: server.to_string(),
            raw_response: raw,
        }
    }

    pub fn record(&self) -> ParsedRecord {
        ParsedRecord::parse(&self.raw_response)
    }
}

/// `Label: value` pairs pulled out of a response.
///
/// Labels keep their original spelling and case. A label that appears on
/// several lines keeps every value in response order; lookups return the
/// last, the way a later line overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    fields: BTreeMap<String, Vec<String>>,
}

impl ParsedRecord {
    pub fn parse(raw: &str) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for line in raw.lines() {
            if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let key = trim_blanks(key);
            let value = trim_blanks(value);
            if key.is_empty() || value.is_empty() {
                continue;
            }

            fields
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }

        Self { fields }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .get(label)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn get_all(&self, label: &str) -> &[String] {
        self.fields.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Labels in sorted order with their last value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.last().map(|last| (k.as_str(), last.as_str())))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Spaces and tabs, plus the stray `\r` some servers leave before `\r\n`.
fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r')
}
