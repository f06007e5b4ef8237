#![forbid(unsafe_code)]

use std::io::Write as _;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;
use zn_tune::{parse_number, CriticalPoint, OutputFormat, Report, Rule};

mod logging;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::Yellow.on_default().bold())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Cyan.on_default())
    .error(AnsiColor::Red.on_default().bold())
    .invalid(AnsiColor::Red.on_default());

/// Ziegler-Nichols PID tuning
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Computes discrete PID gains (kp, ki, kd) from the critical gain and \
        critical period of a loop, for a controller sampled every DT.",
    styles = STYLES
)]
struct Args {
    /// Critical (ultimate) gain
    #[arg(value_name = "KC", value_parser = parse_number, allow_hyphen_values = true)]
    kc: f64,
    /// Period of the sustained oscillation at the critical gain
    #[arg(value_name = "PC", value_parser = parse_number, allow_hyphen_values = true)]
    pc: f64,
    /// Sample interval of the controller, in the same unit as PC
    #[arg(value_name = "DT", value_parser = parse_number, allow_hyphen_values = true)]
    dt: f64,
    /// Tuning rule
    #[arg(short, long, value_enum, default_value_t)]
    rule: Rule,
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let critical = CriticalPoint {
        gain: args.kc,
        period: args.pc,
    };
    let report = Report::new(args.rule, critical, args.dt)?;
    debug!(gains = ?report.gains, "computed gains");

    let line = report
        .render(args.format)
        .wrap_err("failed to render report")?;
    writeln!(std::io::stdout().lock(), "{line}")
        .wrap_err("failed to write to stdout")?;

    Ok(())
}
