//! `dalform register`: validate a registration form payload.

use dalform_core::application::{input::parse_payload, validate_registration_value};
use dalform_core::domain::FormField;
use tracing::instrument;

use crate::{cli::PayloadArgs, commands::read_payload, error::CliResult, output::OutputManager};

const FIELDS: [FormField; 2] = [FormField::Email, FormField::Password];

#[instrument(skip_all)]
pub fn execute(args: PayloadArgs, output: OutputManager) -> CliResult<()> {
    let text = read_payload(args.path().map(|p| p.as_path()))?;
    let payload = parse_payload(&text)?;
    let outcome = validate_registration_value(&payload);

    super::report_outcome(&output, "Registration form", &FIELDS, &outcome)
}
