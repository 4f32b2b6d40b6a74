//! Command surface for TrackSuite license management.
//!
//! One invocation performs exactly one lifecycle action. When several flags
//! are given, only the highest-priority one runs:
//! help > trial > license > status > deactivate > version.

pub mod report;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use tracing::info;
use tracksuite_license::{
    activate_license, activate_trial, deactivate, evaluate, initialize, ActivationKind,
    DeviceInfo, LicenseAuthority, LicenseError, ProductIdentity,
};

#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "license-manager")]
#[command(about = "License management for PickNik TrackSuite")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Print help
    #[arg(short, long)]
    pub help: bool,

    /// Activate evaluation key
    #[arg(short, long, value_name = "TRIAL-KEY")]
    pub trial: Option<String>,

    /// Activate license key
    #[arg(short, long, value_name = "LICENSE-KEY")]
    pub license: Option<String>,

    /// Check on license status
    #[arg(short, long)]
    pub status: bool,

    /// Deactivate license
    #[arg(short, long)]
    pub deactivate: bool,

    /// Print TrackSuite version
    #[arg(short, long)]
    pub version: bool,
}

/// The single lifecycle action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Trial(String),
    License(String),
    Status,
    Deactivate,
    Version,
}

impl Args {
    /// Picks the highest-priority requested action. No flags means help.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self { help: true, .. } => Action::Help,
            Self {
                trial: Some(key), ..
            } => Action::Trial(key.clone()),
            Self {
                license: Some(key),
                ..
            } => Action::License(key.clone()),
            Self { status: true, .. } => Action::Status,
            Self {
                deactivate: true, ..
            } => Action::Deactivate,
            Self { version: true, .. } => Action::Version,
            _ => Action::Help,
        }
    }
}

/// How a non-fatal invocation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    UsageError,
}

impl Exit {
    /// Process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::UsageError => 1,
        }
    }
}

/// Exit code for an error returned by [`run`]: the authority status for
/// fatal licensing errors, 1 for anything else.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LicenseError>()
        .map_or(1, LicenseError::exit_code)
}

/// Runs one invocation: registers the product identity, parses `argv`
/// (program name first) and performs the selected action.
///
/// # Errors
///
/// Fatal licensing failures come back as [`LicenseError`] inside the
/// `anyhow::Error`; see [`exit_code`].
pub fn run<A, I, T, W>(
    authority: &mut A,
    identity: &ProductIdentity,
    argv: I,
    out: &mut W,
) -> Result<Exit>
where
    A: LicenseAuthority,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    initialize(authority, identity)?;

    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            write!(out, "{}", err.render()).context("writing parse error")?;
            return Ok(Exit::UsageError);
        }
    };

    dispatch(authority, identity, &args.action(), out)?;
    Ok(Exit::Success)
}

/// Performs a single action against an initialized authority.
///
/// # Errors
///
/// Returns fatal licensing errors and output failures.
pub fn dispatch<A, W>(
    authority: &mut A,
    identity: &ProductIdentity,
    action: &Action,
    out: &mut W,
) -> Result<()>
where
    A: LicenseAuthority,
    W: Write,
{
    info!(?action, "dispatching");
    match action {
        Action::Help => {
            writeln!(out, "{}", Args::command().render_help()).context("writing help")?;
        }
        Action::Trial(key) => {
            writeln!(out, "{}", report::key_line(ActivationKind::Trial, key))?;
            let metadata = DeviceInfo::collect().activation_metadata();
            let outcome = activate_trial(authority, key, &metadata)?;
            writeln!(out, "{}", report::activation_line(ActivationKind::Trial, outcome))?;
        }
        Action::License(key) => {
            writeln!(out, "{}", report::key_line(ActivationKind::License, key))?;
            let outcome = activate_license(authority, key)?;
            writeln!(out, "{}", report::activation_line(ActivationKind::License, outcome))?;
        }
        Action::Status => {
            let eval = evaluate(authority);
            for line in report::status_lines(&eval) {
                writeln!(out, "{line}")?;
            }
        }
        Action::Deactivate => {
            deactivate(authority)?;
            writeln!(out, "License deactivated successfully")?;
        }
        Action::Version => {
            writeln!(out, "Version: {}", identity.app_version())?;
        }
    }
    Ok(())
}
