//! Deploy command - resolve the configuration and run the action.

use tracing::debug;

use crate::cli::{output, Cli};
use crate::core::launcher::Launcher;
use crate::core::lifecycle::{Action, Compose};
use crate::error::Result;

/// Resolve and write the configuration, then run the requested action.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    let identity = cli.identity();

    if !cli.extra.is_empty() {
        debug!(flags = ?cli.extra.keys().collect::<Vec<_>>(), "unused flags");
    }

    let compose = Compose::new(&settings);
    let launcher = Launcher::new(settings, compose);
    let env_file = launcher.settings().env_file.display().to_string();

    output::progress("Resolving configuration");
    let resolution = match launcher.configure(&identity) {
        Ok(resolution) => {
            output::progress_done(true);
            resolution
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e);
        }
    };

    output::success(&format!(
        "wrote {} ({} entries)",
        output::path(&env_file),
        resolution.set().len()
    ));
    output::kv("kept", resolution.kept().len());
    output::kv("new", resolution.proposed().len());

    if !resolution.dropped().is_empty() {
        output::warn(&format!(
            "dropped {} stale key(s) from {}:",
            resolution.dropped().len(),
            env_file
        ));
        for key in resolution.dropped() {
            output::list_item(key);
        }
    }

    if cli.dry_run {
        let action = Action::parse(cli.action.as_deref())?;
        let line = launcher.orchestrator().command_line(action).join(" ");
        output::hint(&format!("dry run, would run: {}", line));
        return Ok(());
    }

    let action = launcher.dispatch(cli.action.as_deref())?;
    output::success(&format!(
        "{} finished for project {}",
        output::cmd(action.as_str()),
        launcher.settings().project
    ));

    Ok(())
}
