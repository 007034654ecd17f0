//! `dalform email`: check a Dalhousie email address.

use dalform_core::domain::{FieldError, validate_dal_email};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    cli::{EmailArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailReport<'a> {
    email: &'a str,
    is_valid: bool,
    error: Option<FieldError>,
}

#[instrument(skip_all)]
pub fn execute(args: EmailArgs, output: OutputManager) -> CliResult<()> {
    let is_valid = validate_dal_email(&args.address);
    debug!(is_valid, "email checked");

    let report = EmailReport {
        email: &args.address,
        is_valid,
        error: (!is_valid).then_some(FieldError::NotDalEmail),
    };

    match (output.format(), &report.error) {
        (OutputFormat::Json, _) => output.json(&report)?,
        (_, None) => output.success(&format!("{} is a Dalhousie address", args.address))?,
        (_, Some(error)) => output.error(&error.to_string())?,
    }

    if is_valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            subject: "Email",
            failures: 1,
        })
    }
}
