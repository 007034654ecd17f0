//! Diagnostic logging for `dalform`.
//!
//! Validation reports and error blocks are printed by the command handlers
//! and `handle_error`; the tracing output here is a separate diagnostic
//! channel on stderr. At the default level it only shows internal faults,
//! so a failed validation prints its report once and nothing else.
//!
//! | Flag(s)   | `dalform*` level | Typical output                       |
//! |-----------|------------------|--------------------------------------|
//! | `--quiet` | off              | nothing                              |
//! | (none)    | error            | internal faults only                 |
//! | `-v`      | info             | + run summary                        |
//! | `-vv`     | debug            | + rules in use, per-form outcomes    |
//! | `-vvv`    | trace            | + spans                              |
//!
//! `RUST_LOG` replaces the computed filter when set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown by default.
const OWN_CRATES: [&str; 2] = ["dalform", "dalform_core"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(directives(level_for(args))),
    };

    // Timestamps add nothing to a one-shot command; spans only matter at -vvv.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Level for this crate and the core library.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::OFF;
    }
    match args.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter string: our crates at `level`, dependencies at `warn` at most.
fn directives(level: LevelFilter) -> String {
    let deps = level.min(LevelFilter::WARN);
    let mut out = deps.to_string().to_lowercase();
    for krate in OWN_CRATES {
        out.push_str(&format!(",{krate}={}", level.to_string().to_lowercase()));
    }
    out
}
