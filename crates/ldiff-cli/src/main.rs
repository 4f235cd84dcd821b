//! Command-line interface for the `ldiff` line comparison tool.
//!
//! Loads two text files as line multisets, diffs them with
//! `ldiff-core`, and writes the report to stdout or a file. Set the
//! `LDIFF_LOG` environment variable (e.g. `LDIFF_LOG=debug`) to see
//! per-phase trace output on stderr.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use ldiff_core::{load, RenderConfig};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ldiff", version, about = "Compare two text files as line multisets")]
struct Cli {
    /// Path to the first file.
    first: PathBuf,

    /// Path to the second file.
    second: PathBuf,

    /// Render the text report using ANSI colors.
    #[arg(long = "color", action = ArgAction::SetTrue)]
    color: bool,

    /// Select report format (`text` or `json`).
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report to FILE instead of STDOUT.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err}");
            std::process::exit(1);
        }
    }
}

fn try_main() -> Result<i32> {
    init_tracing();
    let cli = Cli::parse();

    let lhs = load(&cli.first)?;
    tracing::debug!(
        path = %cli.first.display(),
        total = lhs.total_lines(),
        content = lhs.content_lines(),
        "loaded first input"
    );
    let rhs = load(&cli.second)?;
    tracing::debug!(
        path = %cli.second.display(),
        total = rhs.total_lines(),
        content = rhs.content_lines(),
        "loaded second input"
    );

    let result = lhs.diff(&rhs);
    tracing::debug!(
        only_in_first = result.only_in_lhs().len(),
        only_in_second = result.only_in_rhs().len(),
        count_mismatches = result.count_mismatches().len(),
        "computed diff"
    );

    let lhs_label = cli.first.display().to_string();
    let rhs_label = cli.second.display().to_string();

    let rendered = match cli.format {
        OutputFormat::Text => {
            let config = RenderConfig::default().with_color(cli.color);
            result.render(&lhs_label, &rhs_label, &config)
        }
        OutputFormat::Json => {
            let mut json = result.render_json().context("failed to render JSON report")?;
            json.push('\n');
            json
        }
    };

    if let Some(path) = &cli.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output to {}", path.display()))?;
    } else {
        print!("{rendered}");
        io::stdout().flush().ok();
    }

    Ok(0)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
