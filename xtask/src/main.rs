// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - su-vedtak development automation
//!
//! Runs the checks every change to the reconciliation workspace must pass:
//! the three library crates (`su-vedtak-domain`, `su-vedtak-audit`,
//! `su-vedtak`) are linted, built, documented and tested from here.
//!
//! ### CI pipeline
//!
//! `cargo xtask ci` runs [`CI_STEPS`] in order and stops at the first
//! failing step, naming it in the log.
//!
//! ### Property suites
//!
//! The timeline properties (order invariance, later-wins, coverage
//! conservation and slicing) live in `tests::properties` modules of the
//! domain and core crates.
//!
//! - `cargo test` runs them with proptest's default case count
//! - `cargo xtask test-properties --cases N` reruns only those suites in
//!   release mode with `PROPTEST_CASES=N`
//!
//! The workspace is pure computation with no services to provision.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Packages whose test modules contain proptest suites.
const PROPERTY_PACKAGES: [&str; 2] = ["su-vedtak-domain", "su-vedtak"];

/// Markdown documents checked by `lint-markdown`. The reference material
/// under `examples/` is not ours to lint.
const MARKDOWN_GLOBS: [&str; 3] = ["*.md", "crates/**/*.md", "!**/target"];

/// The CI pipeline, in order.
const CI_STEPS: [(&str, fn() -> Result<()>); 5] = [
    ("lint", lint),
    ("deny", deny),
    ("machete", machete),
    ("build", build),
    ("test", test),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
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
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Run the full CI pipeline (lint, deny, machete, build, test)
    CI,

    /// Build every crate and target
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Check that README.md matches the su-vedtak crate docs
    #[command(visible_alias = "cr")]
    CheckReadme,

    /// Write an lcov coverage report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Check dependency licenses and advisories
    #[command(visible_alias = "cd")]
    Deny,

    /// Check for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs for the library crates with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting with nightly rustfmt
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Lint the workspace's markdown documents
    #[command(visible_alias = "md")]
    LintMarkdown,

    /// Check for typos
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply nightly rustfmt
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Apply typo corrections
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Rerun the property suites with a raised case count
    #[command(visible_alias = "tp")]
    TestProperties {
        /// Cases per property
        #[arg(long, default_value_t = 4096)]
        cases: u32,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Deny => deny(),
            Self::Machete => machete(),
            Self::CheckReadme => check_readme(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::LintMarkdown => lint_markdown(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::FixTypos => fix_typos(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::TestProperties { cases } => test_properties(cases),
        }
    }
}

/// Run every step in [`CI_STEPS`], stopping at the first failure.
fn ci() -> Result<()> {
    for (name, step) in CI_STEPS {
        tracing::info!("ci step: {name}");
        step().wrap_err_with(|| format!("ci step '{name}' failed"))?;
    }
    Ok(())
}

fn deny() -> Result<()> {
    run_cargo(&["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

fn build() -> Result<()> {
    run_cargo(&["build", "--all-targets", "--all-features"])
}

fn check() -> Result<()> {
    run_cargo(&["check", "--all-targets", "--all-features"])
}

/// The README is generated from the `su-vedtak` crate docs by cargo-rdme.
fn check_readme() -> Result<()> {
    run_cargo(&["rdme", "--workspace-project", "su-vedtak", "--check"])
}

fn coverage() -> Result<()> {
    run_cargo(&[
        "llvm-cov",
        "--lcov",
        "--output-path",
        "target/lcov.info",
        "--all-features",
    ])
}

/// Lint formatting, typos, clippy, and docs. Markdown findings only warn.
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    if let Err(err) = lint_markdown() {
        tracing::warn!("README.md or DESIGN.md needs markdown fixes: {err}");
    }
    Ok(())
}

fn lint_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

fn fix_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build each library crate's docs the way docs.rs would.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        tracing::debug!("documenting {}", package.name);
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()
        .wrap_err_with(|| format!("docs for {} have warnings", package.name))?;
    }

    Ok(())
}

fn lint_format() -> Result<()> {
    run_cargo_nightly(&["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo_nightly(&["fmt", "--all"])
}

/// Lint [`MARKDOWN_GLOBS`] with [markdownlint-cli2](https://github.com/DavidAnson/markdownlint-cli2)
fn lint_markdown() -> Result<()> {
    cmd("markdownlint-cli2", MARKDOWN_GLOBS).run_with_trace()?;
    Ok(())
}

/// Check for typos using [typos-cli](https://github.com/crate-ci/typos/).
///
/// Norwegian domain terms (vedtak, stans, grunnlag) belong in the typos
/// allow-list rather than being renamed.
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

fn fix_typos() -> Result<()> {
    cmd!("typos", "-w").run_with_trace()?;
    Ok(())
}

fn test() -> Result<()> {
    test_libs()?;
    test_docs()?; // run last because it's slow
    Ok(())
}

fn test_docs() -> Result<()> {
    run_cargo(&["test", "--doc", "--all-features"])
}

fn test_libs() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])
}

/// Run only the proptest suites, with `cases` cases per property.
///
/// The test name filter `properties` selects the `tests::properties`
/// modules in each of [`PROPERTY_PACKAGES`].
fn test_properties(cases: u32) -> Result<()> {
    let cases: String = cases.to_string();
    tracing::info!("Running property suites with {cases} cases each");

    for package in PROPERTY_PACKAGES {
        cmd(
            "cargo",
            ["test", "--release", "--package", package, "--lib", "properties"],
        )
        .env("PROPTEST_CASES", &cases)
        .run_with_trace()
        .wrap_err_with(|| format!("property suites failed in {package}"))?;
    }

    Ok(())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
