//! CLI tool for tablegroup - groups a JSON record list and outputs JSON
//!
//! Usage:
//!   tablegroup_cli <records.json>                     # Group by lastOrderDate
//!   tablegroup_cli --sample                           # Use the built-in customers
//!   tablegroup_cli <records.json> --key city          # Group by another field
//!   tablegroup_cli <records.json> --selected 3411,2562
//!   tablegroup_cli <records.json> --widths 300:48,120,90,90
//!   tablegroup_cli <records.json> -o out.json         # Output JSON to file
//!
//! Set `RUST_LOG=tablegroup=trace` to see what the library is doing.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tablegroup::error::{Result, TablegroupError};
use tablegroup::grouping::try_group_by_key;
use tablegroup::layout::ColumnMeasurement;
use tablegroup::sample::{sample_customers, GROUP_ID_PREFIX};
use tablegroup::summary::{summarize, GroupSummary};
use tablegroup::{JsonRecord, ResourceSelection};

const USAGE: &str = "Usage: tablegroup_cli <records.json | --sample> [--key FIELD] \
[--prefix PREFIX] [--selected ID,ID] [--widths WIDTH:W1,W2,...] [-o output.json]";

struct Options {
    input: Option<String>,
    key: String,
    prefix: String,
    selected: ResourceSelection,
    widths: Option<ColumnMeasurement>,
    output: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'g, 'a> {
    groups: Vec<GroupSummary<'g, 'a, JsonRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column_span: Option<i32>,
}

fn parse_widths(arg: &str) -> Result<ColumnMeasurement> {
    let (container, cells) = arg
        .split_once(':')
        .ok_or_else(|| TablegroupError::InvalidMeasurement(format!("expected WIDTH:W1,W2,... got {arg}")))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| TablegroupError::InvalidMeasurement(format!("{s}: {e}")))
    };
    let cell_widths = cells
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse)
        .collect::<Result<Vec<f64>>>()?;
    ColumnMeasurement::validated(parse(container)?, cell_widths)
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        input: None,
        key: "lastOrderDate".to_string(),
        prefix: GROUP_ID_PREFIX.to_string(),
        selected: ResourceSelection::new(),
        widths: None,
        output: None,
    };
    let mut sample = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| TablegroupError::Other(format!("{arg} needs a value")))
        };
        match arg.as_str() {
            "--sample" => sample = true,
            "--key" => options.key = value()?,
            "--prefix" => options.prefix = value()?,
            "--selected" => {
                options.selected = value()?
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "--widths" => options.widths = Some(parse_widths(&value()?)?),
            "-o" => options.output = Some(value()?),
            other if other.starts_with('-') => {
                return Err(TablegroupError::Other(format!("unknown option {other}")));
            }
            other => options.input = Some(other.to_string()),
        }
    }

    if sample == options.input.is_some() {
        return Err(TablegroupError::Other(
            "give either a records file or --sample".to_string(),
        ));
    }
    Ok(options)
}

fn load_records(options: &Options) -> Result<Vec<JsonRecord>> {
    match &options.input {
        Some(path) => {
            let data = fs::read(path)?;
            Ok(serde_json::from_slice(&data)?)
        }
        None => {
            let value = serde_json::to_value(sample_customers())?;
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// Group the records and render the report as pretty JSON.
///
/// Goes through a `Value` so a record's own `position` field collapses into
/// the member's computed position instead of appearing twice.
fn render_report(options: &Options) -> Result<String> {
    let records = load_records(options)?;
    tracing::debug!(records = records.len(), key = %options.key, "loaded records");

    let groups = try_group_by_key(&records, |r| r.str_field(&options.key))?;
    let report = Report {
        groups: summarize(&groups, &options.prefix, &options.selected),
        column_span: options.widths.as_ref().map(ColumnMeasurement::visible_column_span),
    };
    Ok(serde_json::to_string_pretty(&serde_json::to_value(&report)?)?)
}

fn run(args: &[String]) -> Result<()> {
    let options = parse_args(args)?;
    let json = render_report(&options)?;

    match &options.output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
}
