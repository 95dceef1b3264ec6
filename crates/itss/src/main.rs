use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use itss::models::TradeInput;
use itss::report::OutputFormat;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "itss",
    about = "Insider Trade Suspicion Scorer - score a trade and classify it as Routine, Moderate or Suspicious"
)]
struct Cli {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read TradeInput JSON from a file ("-" for stdin) instead of the form flags
    #[arg(
        short,
        long,
        conflicts_with_all = ["trade_value", "reporting_delay", "executive", "plan_used", "past_average"]
    )]
    input: Option<String>,

    #[command(flatten)]
    form: FormArgs,

    /// Output format for the score report
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the radar chart SVG to this path
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Log output format (logs go to stderr, filtered by RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

/// The five trade attributes, with the same defaults as a blank form.
#[derive(Args, Debug)]
struct FormArgs {
    /// Trade value in USD
    #[arg(long, value_parser = parse_usd, default_value = "0")]
    trade_value: Decimal,

    /// Days between trade and publication
    #[arg(long, default_value_t = 0)]
    reporting_delay: u32,

    /// Is the insider a high-level executive?
    #[arg(long, value_enum, default_value_t = YesNo::No)]
    executive: YesNo,

    /// Was a 10b5-1 (pre-scheduled) plan used?
    #[arg(long, value_enum, default_value_t = YesNo::Yes)]
    plan_used: YesNo,

    /// Average past trade value of this insider in USD
    #[arg(long, value_parser = parse_usd, default_value = "0")]
    past_average: Decimal,
}

impl FormArgs {
    fn to_input(&self) -> TradeInput {
        TradeInput {
            trade_value: self.trade_value,
            reporting_delay_days: i64::from(self.reporting_delay),
            is_high_level_executive: self.executive.into(),
            used_prearranged_plan: self.plan_used.into(),
            past_average_trade_value: self.past_average,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        matches!(value, YesNo::Yes)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

/// Reject negative amounts before they reach the scorer.
fn parse_usd(raw: &str) -> Result<Decimal, String> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|e| format!("not a valid amount: {e}"))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("amount must be non-negative (got {value})"));
    }
    Ok(value)
}

fn init_tracing(format: LogFormat) {
    // Respects the RUST_LOG env var
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn read_input(source: &str) -> Result<TradeInput> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read input: {source}"))?
    };

    serde_json::from_str(&raw).context("Failed to parse TradeInput JSON")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = itss::load_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Failed to load default config".to_string(),
    })?;
    let scorer = itss::build_scorer(&config).context("Invalid scoring configuration")?;

    let input = match &cli.input {
        Some(source) => read_input(source)?,
        None => cli.form.to_input(),
    };

    let report = itss::assess(&scorer, &input).context("Trade rejected")?;

    let format = match (cli.format, cli.pretty) {
        (Format::Text, _) => OutputFormat::Text,
        (Format::Markdown, _) => OutputFormat::Markdown,
        (Format::Json, false) => OutputFormat::Json,
        (Format::Json, true) => OutputFormat::JsonPretty,
    };
    let view = itss::render(&report, format, &config).context("Failed to render report")?;

    println!("{}", view.body.trim_end());

    if let Some(path) = &cli.chart {
        std::fs::write(path, &view.chart_svg)
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        info!(path = %path.display(), "Wrote radar chart");
    }

    Ok(())
}
