//! `dalform password`: check password strength.
//!
//! The password comes from the positional argument or, when that is
//! omitted, from the first line of stdin.

use std::io::BufRead as _;

use dalform_core::domain::{PasswordRule, password_errors};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    cli::{OutputFormat, PasswordArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordReport {
    is_valid: bool,
    errors: Vec<PasswordRule>,
}

#[instrument(skip_all)]
pub fn execute(args: PasswordArgs, output: OutputManager) -> CliResult<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_stdin_line()?,
    };

    let errors = password_errors(&password);
    debug!(failures = errors.len(), "password checked");

    let report = PasswordReport {
        is_valid: errors.is_empty(),
        errors,
    };

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else if report.is_valid {
        output.success("Password meets every rule")?;
    } else {
        for rule in &report.errors {
            output.error(&rule.to_string())?;
        }
    }

    if report.is_valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            subject: "Password",
            failures: report.errors.len(),
        })
    }
}

fn read_stdin_line() -> CliResult<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .with_cli_context(|| "Failed to read password from stdin")?;
    Ok(strip_line_ending(line))
}

/// Drop one trailing `\n` or `\r\n`; every other character is part of the
/// password.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
