//! One complete invocation: look up, render, report.
//!
//! Output is rendered in full before anything is written, so a failed lookup
//! leaves standard output untouched.

use std::io::Write;

use tracing::warn;

use crate::colors::CatppuccinExt;
use crate::error::Result;
use crate::options::WhoisOptions;
use crate::output::get_formatter;
use crate::whois::{Query, Transport, WhoisClient};

pub const PROGRAM_NAME: &str = "whois";

/// Looks up `query` and returns the rendered text for standard output.
pub async fn execute<T: Transport>(
    client: &WhoisClient<T>,
    query: &str,
    options: &WhoisOptions,
) -> Result<String> {
    options.validate()?;

    if let Some(path) = &options.output_file {
        warn!(path = %path.display(), "--output is not supported yet, writing to standard output");
    }

    let query = Query::new(query);
    let response = client.lookup(&query).await?;

    let formatter = get_formatter(options.format, options.formatter_options());
    Ok(formatter.format_whois(&response))
}

/// Writes the outcome of [`execute`] and returns the process exit code.
pub fn report<O: Write, E: Write>(
    result: Result<String>,
    options: &WhoisOptions,
    out: &mut O,
    err: &mut E,
) -> i32 {
    let failure = match result {
        Ok(text) => match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => return 0,
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    };

    if !options.quiet {
        let label = if options.use_colors {
            "error".ctp_red().to_string()
        } else {
            "error".to_string()
        };
        let _ = writeln!(err, "{}: {}: {}", PROGRAM_NAME, label, failure);
    }
    1
}

pub async fn run<T: Transport, O: Write, E: Write>(
    client: &WhoisClient<T>,
    query: &str,
    options: &WhoisOptions,
    out: &mut O,
    err: &mut E,
) -> i32 {
    let result = execute(client, query, options).await;
    report(result, options, out, err)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use tokio::net::TcpListener;

    use super::*;
    use crate::output::OutputFormat;
    use crate::whois::mock::ScriptedTransport;
    use crate::WhoisError;

    const FIRST_REPLY: &str = "Domain Name: EXAMPLE.COM\r\nRegistrar WHOIS Server: whois.example-registrar.com\r\n";
    const SECOND_REPLY: &str = "Domain Name: example.com\r\nRegistrar: Example Registrar, Inc.\r\n";

    async fn run_with(
        transport: ScriptedTransport,
        query: &str,
        options: &WhoisOptions,
    ) -> (i32, String, String, usize) {
        let client = options.client_with(transport);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&client, query, options, &mut out, &mut err).await;
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            client.transport().connections(),
        )
    }

    #[tokio::test]
    async fn test_summary_after_referral() {
        let transport = ScriptedTransport::new().reply(FIRST_REPLY).reply(SECOND_REPLY);

        let (code, out, err, connections) =
            run_with(transport, "example.com", &WhoisOptions::default()).await;

        assert_eq!(code, 0);
        assert_eq!(out, "Domain Name: example.com\nRegistrar: Example Registrar, Inc.\n");
        assert!(err.is_empty());
        assert_eq!(connections, 2);
    }

    #[tokio::test]
    async fn test_no_follow_renders_first_response_only() {
        let options = WhoisOptions {
            follow_referrals: false,
            format: OutputFormat::Json,
            ..WhoisOptions::default()
        };
        let transport = ScriptedTransport::new().reply(FIRST_REPLY).reply(SECOND_REPLY);

        let (code, out, _, connections) = run_with(transport, "example.com", &options).await;

        assert_eq!(code, 0);
        assert_eq!(connections, 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["server"], "whois.verisign-grs.com");
        assert_eq!(value["raw_response"], FIRST_REPLY);
        assert_eq!(value["data"]["Domain Name"], "EXAMPLE.COM");
    }

    #[tokio::test]
    async fn test_raw_output() {
        let options = WhoisOptions {
            format: OutputFormat::Raw,
            follow_referrals: false,
            ..WhoisOptions::default()
        };
        let transport = ScriptedTransport::new().reply(FIRST_REPLY);

        let (code, out, _, _) = run_with(transport, "example.com", &options).await;

        assert_eq!(code, 0);
        assert_eq!(out, FIRST_REPLY);
    }

    #[tokio::test]
    async fn test_failure_prints_diagnostic_and_nothing_on_stdout() {
        let transport = ScriptedTransport::new().fail(WhoisError::EmptyResponse(
            "whois.verisign-grs.com".to_string(),
        ));

        let (code, out, err, _) =
            run_with(transport, "example.com", &WhoisOptions::default()).await;

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(
            err,
            "whois: error: No response from WHOIS server: whois.verisign-grs.com\n"
        );
    }

    #[tokio::test]
    async fn test_quiet_suppresses_diagnostic() {
        let options = WhoisOptions {
            quiet: true,
            ..WhoisOptions::default()
        };
        let transport = ScriptedTransport::new().fail(WhoisError::Resolution {
            server: "whois.verisign-grs.com".to_string(),
        });

        let (code, out, err, _) = run_with(transport, "example.com", &options).await;

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_failed_referral_discards_first_answer() {
        let transport = ScriptedTransport::new().reply(FIRST_REPLY).fail(WhoisError::Connect {
            server: "whois.example-registrar.com".to_string(),
            reason: "Connection refused".to_string(),
        });

        let (code, out, err, connections) =
            run_with(transport, "example.com", &WhoisOptions::default()).await;

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("whois: error: Failed to connect to WHOIS server: whois.example-registrar.com"));
        assert_eq!(connections, 2);
    }

    #[tokio::test]
    async fn test_invalid_timeout_makes_no_connection() {
        let options = WhoisOptions {
            timeout_secs: 0,
            ..WhoisOptions::default()
        };

        let (code, out, err, connections) =
            run_with(ScriptedTransport::new(), "example.com", &options).await;

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "whois: error: invalid timeout value: 0\n");
        assert_eq!(connections, 0);
    }

    #[tokio::test]
    async fn test_output_file_still_writes_stdout() {
        let options = WhoisOptions {
            output_file: Some("result.txt".into()),
            format: OutputFormat::Raw,
            ..WhoisOptions::default()
        };
        let transport = ScriptedTransport::new().reply("Domain: example.de\n");

        let (code, out, _, _) = run_with(transport, "example.de", &options).await;

        assert_eq!(code, 0);
        assert_eq!(out, "Domain: example.de\n");
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_within_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let options = WhoisOptions {
            server: Some("127.0.0.1".to_string()),
            port,
            timeout_secs: 1,
            ..WhoisOptions::default()
        };
        let client = options.client();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let started = Instant::now();
        let code = run(&client, "example.com", &options, &mut out, &mut err).await;

        assert_eq!(code, 1);
        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("whois: error: "));
    }

    #[tokio::test]
    async fn test_silent_server_fails_within_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let options = WhoisOptions {
            server: Some("127.0.0.1".to_string()),
            port,
            timeout_secs: 1,
            ..WhoisOptions::default()
        };
        let client = options.client();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let started = Instant::now();
        let code = run(&client, "example.com", &options, &mut out, &mut err).await;

        assert_eq!(code, 1);
        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(out.is_empty());
    }
}
