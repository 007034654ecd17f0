//! `dalform question`: validate a question form payload.

use dalform_core::application::{QuestionService, input::parse_payload};
use dalform_core::domain::{FormField, QuestionRules};
use tracing::{debug, instrument};

use crate::{
    cli::QuestionArgs, commands::read_payload, config::AppConfig, error::CliResult,
    output::OutputManager,
};

const FIELDS: [FormField; 3] = [FormField::Title, FormField::Description, FormField::Tags];

/// `--edit` uses the fixed edit limits; otherwise the configured `[rules]`.
#[instrument(skip_all, fields(edit = args.edit))]
pub fn execute(args: QuestionArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let rules = if args.edit {
        QuestionRules::EDIT
    } else {
        config.rules.to_rules()?
    };
    debug!(?rules, "question rules selected");
    let service = QuestionService::new(rules);

    let text = read_payload(args.payload.path().map(|p| p.as_path()))?;
    let payload = parse_payload(&text)?;
    let outcome = service.validate_value(&payload);

    super::report_outcome(&output, "Question form", &FIELDS, &outcome)
}
