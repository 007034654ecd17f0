//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation rules live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dalform",
    bin_name = "dalform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate Dal Overflow form payloads",
    long_about = "Dalform checks question and registration payloads against \
                  the same rules the Dal Overflow client enforces.",
    after_help = "EXAMPLES:\n\
        \x20 dalform email student@dal.ca\n\
        \x20 dalform password 'Test1234!'\n\
        \x20 dalform question draft.json\n\
        \x20 cat signup.json | dalform register --output-format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that an address is a Dalhousie email.
    #[command(
        about = "Check a Dalhousie email address",
        after_help = "EXAMPLES:\n\
            \x20 dalform email student@dal.ca"
    )]
    Email(EmailArgs),

    /// Check a password against the strength rules.
    #[command(
        visible_alias = "pw",
        about = "Check password strength",
        after_help = "EXAMPLES:\n\
            \x20 dalform password 'Test1234!'\n\
            \x20 printf 'Test1234!' | dalform password"
    )]
    Password(PasswordArgs),

    /// Validate a question payload.
    #[command(
        visible_alias = "q",
        about = "Validate a question form payload",
        after_help = "EXAMPLES:\n\
            \x20 dalform question draft.json\n\
            \x20 dalform question - < draft.json\n\
            \x20 dalform question --edit update.json"
    )]
    Question(QuestionArgs),

    /// Validate a registration payload.
    #[command(
        about = "Validate a registration form payload",
        after_help = "EXAMPLES:\n\
            \x20 dalform register signup.json"
    )]
    Register(PayloadArgs),

    /// Initialise a Dalform configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dalform init           # global config\n\
            \x20 dalform init --local   # .dalform.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dalform completions bash > ~/.local/share/bash-completion/completions/dalform\n\
            \x20 dalform completions zsh  > ~/.zfunc/_dalform"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Dalform configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dalform config get rules.title_max\n\
            \x20 dalform config list"
    )]
    Config(ConfigCommands),
}

// ── email / password ──────────────────────────────────────────────────────────

/// Arguments for `dalform email`.
#[derive(Debug, Args)]
pub struct EmailArgs {
    /// Address to check.  Not trimmed or case-folded.
    #[arg(value_name = "ADDRESS", help = "Email address to check")]
    pub address: String,
}

/// Arguments for `dalform password`.
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password to check.  Read from stdin when omitted, which keeps it out
    /// of shell history.
    #[arg(value_name = "PASSWORD", help = "Password (read from stdin if omitted)")]
    pub password: Option<String>,
}

// ── question / register ───────────────────────────────────────────────────────

/// Arguments shared by the payload-validating commands.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// JSON payload file; `-` or nothing reads stdin.
    #[arg(value_name = "FILE", help = "JSON payload file (default: stdin)")]
    pub input: Option<PathBuf>,
}

impl PayloadArgs {
    /// The file to read, or `None` for stdin.
    pub fn path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Arguments for `dalform question`.
#[derive(Debug, Args)]
pub struct QuestionArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Apply the rules for editing an existing question instead of the
    /// configured creation rules.
    #[arg(long = "edit", help = "Validate as an edit of an existing question")]
    pub edit: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dalform init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.dalform.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dalform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dalform config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `rules.title_min`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
