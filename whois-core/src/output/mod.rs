mod json;
mod raw;
mod summary;

pub use json::JsonFormatter;
pub use raw::RawFormatter;
pub use summary::{SummaryFormatter, SUMMARY_FIELDS};

use serde::{Deserialize, Serialize};

use crate::whois::WhoisResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Raw,
    Json,
}

impl OutputFormat {
    /// JSON beats raw, raw beats summary.
    pub fn from_flags(raw: bool, json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if raw {
            OutputFormat::Raw
        } else {
            OutputFormat::Summary
        }
    }
}

/// Turns a response into the exact text written to standard output.
pub trait OutputFormatter {
    fn format_whois(&self, response: &WhoisResponse) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatterOptions {
    pub verbose: bool,
    pub use_colors: bool,
}

pub fn get_formatter(format: OutputFormat, options: FormatterOptions) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Summary => Box::new(
            SummaryFormatter::new()
                .with_full_response(options.verbose)
                .with_colors(options.use_colors),
        ),
        OutputFormat::Raw => Box::new(RawFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
