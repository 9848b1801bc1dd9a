// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod script;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use timecard_persistence::InMemoryPersistence;
use tracing::info;

use crate::script::{Report, Script, ScriptRunner};

/// Timecard - run a command script against a fresh timecard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The resource the timecard is opened for.
    #[arg(short, long, default_value_t = 1)]
    resource: i64,

    /// Path to a JSON command script. If not provided, reads standard input.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn read_script(path: Option<&Path>) -> Result<Script, Box<dyn std::error::Error>> {
    let contents: String = if let Some(path) = path {
        info!("Reading script from: {}", path.display());
        std::fs::read_to_string(path)?
    } else {
        info!("Reading script from standard input");
        let mut buffer: String = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };
    Ok(serde_json::from_str(&contents)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let script: Script = read_script(args.script.as_deref())?;
    info!(
        resource = args.resource,
        steps = script.steps.len(),
        "Running timecard script"
    );

    let (runner, created) = ScriptRunner::start(InMemoryPersistence::new(), args.resource)?;
    let report: Report = runner.run(created, &script);

    let output: String = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
