mod display;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use whois_core::{OutputFormat, WhoisOptions};

use crate::display::Spinner;

#[derive(Parser)]
#[command(name = "whois")]
#[command(about = "Domain and IP address WHOIS lookup utility")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Domain name or IP address to look up
    query: String,

    /// WHOIS server to query
    #[arg(short = 'h', long = "host", value_name = "SERVER")]
    host: Option<String>,

    /// Port number
    #[arg(short, long, default_value_t = whois_core::whois::WHOIS_PORT)]
    port: u16,

    /// Raw output (don't parse)
    #[arg(short, long)]
    raw: bool,

    /// JSON output format
    #[arg(short, long)]
    json: bool,

    /// Don't follow referrals
    #[arg(short = 'f', long = "no-follow")]
    no_follow: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Query timeout in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = whois_core::options::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Save output to file (not implemented yet)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn options(&self) -> WhoisOptions {
        WhoisOptions {
            server: self.host.clone(),
            port: self.port,
            timeout_secs: self.timeout,
            follow_referrals: !self.no_follow,
            format: OutputFormat::from_flags(self.raw, self.json),
            verbose: self.verbose,
            quiet: self.quiet,
            use_colors: std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
            output_file: self.output.clone(),
        }
    }

    fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "off"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_log_level()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors exit 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let options = cli.options();
    let client = options.client();

    let spinner = (!options.quiet && !options.verbose && std::io::stderr().is_terminal())
        .then(|| Spinner::new(&format!("Querying WHOIS for {}...", cli.query)));

    let result = whois_core::execute(&client, &cli.query, &options).await;

    if let Some(spinner) = spinner {
        spinner.finish();
    }

    let code = whois_core::report(
        result,
        &options,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    std::process::exit(code);
}
