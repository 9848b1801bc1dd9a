// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! `cargo xtask <command>` runs the same cargo invocations CI does. Only
//! tasks that need nothing beyond a Rust toolchain (stable, plus nightly for
//! rustfmt and rustdoc, and `cargo-llvm-cov` for coverage) are offered.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Script the `demo` task feeds to the CLI, relative to the workspace root.
const DEMO_SCRIPT: &str = "crates/cli/scripts/week.json";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Lint, build and test, as CI does
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run the sample timecard script through the CLI
    #[command(visible_alias = "dm")]
    Demo,

    /// Run clippy, rustdoc and rustfmt checks
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build the docs of every workspace crate with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Reformat the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests only
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run unit tests only
    #[command(visible_alias = "tl")]
    TestLibs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ]),
            Self::Demo => run_cargo(&[
                "run",
                "--package",
                "timecard-cli",
                "--",
                "--script",
                DEMO_SCRIPT,
                "--pretty",
            ]),
            Self::Lint => lint(),
            Self::LintClippy => clippy(&[]),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::FixClippy => clippy(&["--fix", "--allow-dirty", "--allow-staged"]),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::Test => {
                test_libs()?;
                // doc tests are slow, so they go last
                test_docs()
            }
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    run_cargo(&["build", "--all-targets", "--all-features"])?;
    test_libs()?;
    test_docs()
}

fn lint() -> Result<()> {
    clippy(&[])?;
    lint_docs()?;
    run_cargo_nightly(&["fmt", "--all", "--check"])
}

/// Run clippy over every target with `extra` flags before the lint options
fn clippy(extra: &[&str]) -> Result<()> {
    let mut args: Vec<&str> = vec!["clippy", "--all-targets", "--all-features"];
    args.extend_from_slice(extra);
    args.extend_from_slice(&["--", "-D", "warnings"]);
    run_cargo(&args)
}

/// Build docs per default member with docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd!(
            "cargo",
            "doc",
            "--no-deps",
            "--all-features",
            "--package",
            package.name.as_str()
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

fn test_docs() -> Result<()> {
    run_cargo(&["test", "--doc", "--all-features"])
}

fn test_libs() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // CARGO is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
