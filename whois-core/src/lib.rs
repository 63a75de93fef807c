pub mod colors;
pub mod error;
pub mod options;
pub mod output;
pub mod run;
pub mod whois;

pub use error::{Result, WhoisError};
pub use options::WhoisOptions;
pub use output::{OutputFormat, OutputFormatter};
pub use run::{execute, report, run, PROGRAM_NAME};
pub use whois::{ParsedRecord, Query, QueryKind, Transport, WhoisClient, WhoisResponse};
