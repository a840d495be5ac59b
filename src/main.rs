//! Dockhand - resolve a compose stack's .env and drive its lifecycle.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dockhand::cli::output;
use dockhand::cli::{execute, Cli};
use dockhand::core::constants::{LOG_ENV, LOG_FORMAT_ENV};
use dockhand::error::{ConfigError, Error, LifecycleError, SecretError};

fn main() {
    let cli = Cli::parse_lenient().unwrap_or_else(|e| e.exit());

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dockhand=debug")
        } else {
            EnvFilter::new("dockhand=warn")
        }
    });

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let (plain, structured) = if json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(structured)
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Secret(SecretError::MissingFile(_)) => {
                Some("provide the SMTP bundle, or point --secrets-file at it")
            }
            Error::Lifecycle(LifecycleError::NoAction)
            | Error::Lifecycle(LifecycleError::UnrecognizedAction(_)) => {
                Some("run: dockhand --action up|down|restart")
            }
            Error::Lifecycle(LifecycleError::ProgramNotFound(_)) => {
                Some("install docker, or pass --docker <program>")
            }
            Error::Config(ConfigError::NotFound(_)) => {
                Some("create the settings file, or drop --config to use defaults")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
