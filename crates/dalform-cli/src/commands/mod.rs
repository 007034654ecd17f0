//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print the outcome. The
//! helpers below are shared by the payload-validating commands.

use std::io::{self, Read as _};
use std::path::Path;

use dalform_core::domain::{FormField, FormValidationOutcome};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod email;
pub mod init;
pub mod password;
pub mod question;
pub mod register;

/// Read a payload from `path`, or from stdin when `path` is `None`.
pub(crate) fn read_payload(path: Option<&Path>) -> CliResult<String> {
    let text = match path {
        Some(path) if !path.exists() => {
            return Err(CliError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read payload from '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(stdin_error)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "payload is empty".into(),
            source: None,
        });
    }
    Ok(text)
}

/// `read_to_string` reports bad UTF-8 as `InvalidData`; that is the
/// caller's input, anything else is a failing stream.
fn stdin_error(err: io::Error) -> CliError {
    if err.kind() == io::ErrorKind::InvalidData {
        CliError::InvalidInput {
            message: "stdin is not valid UTF-8 text".into(),
            source: Some(Box::new(err)),
        }
    } else {
        CliError::IoError {
            message: "Failed to read payload from stdin".into(),
            source: err,
        }
    }
}

/// Print a form outcome in the resolved format and turn failures into
/// [`CliError::ValidationFailed`].
///
/// `fields` lists every field the form has, so human output can tick off
/// the ones that passed as well.
pub(crate) fn report_outcome(
    output: &OutputManager,
    subject: &'static str,
    fields: &[FormField],
    outcome: &FormValidationOutcome,
) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(outcome)?,
        _ => {
            for field in fields {
                match outcome.error(*field) {
                    Some(error) => output.error(&format!("{field}: {error}"))?,
                    None => output.success(&format!("{field}: ok"))?,
                }
            }
        }
    }

    if outcome.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            subject,
            failures: outcome.errors().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = read_payload(Some(Path::new("/no/such/payload.json"))).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { .. }));
    }

    #[test]
    fn blank_file_is_invalid_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "  \n").unwrap();
        let err = read_payload(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn stdin_encoding_error_is_user_input() {
        let err = stdin_error(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn stdin_stream_error_is_io() {
        let err = stdin_error(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, CliError::IoError { .. }));
        assert!(err.to_string().contains("stdin"));
        assert!(!err.to_string().contains("UTF-8"));
    }

    #[test]
    fn file_contents_returned() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{}").unwrap();
        assert_eq!(read_payload(Some(file.path())).unwrap(), "{}");
    }
}
