//! `docker compose` orchestrator.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::lifecycle::{Action, Orchestrator};
use crate::error::{LifecycleError, Result};

/// Drives the stack through the compose CLI.
#[derive(Debug, Clone)]
pub struct Compose {
    command: Vec<String>,
    project: String,
    volume_dirs: Vec<PathBuf>,
}

impl Compose {
    /// Create an orchestrator from launcher settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            command: settings.compose.clone(),
            project: settings.project.clone(),
            volume_dirs: settings.volume_dirs(),
        }
    }

    /// Full command line run for `action`.
    pub fn command_line(&self, action: Action) -> Vec<String> {
        let mut line = self.command.clone();
        line.push("-p".to_string());
        line.push(self.project.clone());

        let tail: &[&str] = match action {
            Action::Up => &["up", "-d"],
            Action::Down => &["down", "-v"],
            Action::Restart => &["up", "-d", "--force-recreate"],
        };
        line.extend(tail.iter().map(|s| s.to_string()));

        line
    }

    /// Create the volume directories the compose file mounts.
    pub fn provision(&self) -> Result<()> {
        for dir in &self.volume_dirs {
            debug!(path = %dir.display(), "creating volume directory");
            std::fs::create_dir_all(dir).map_err(|source| LifecycleError::Provision {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    fn run(&self, action: Action) -> Result<()> {
        let line = self.command_line(action);
        let rendered = line.join(" ");

        let program = &line[0];
        which::which(program).map_err(|_| LifecycleError::ProgramNotFound(program.clone()))?;

        info!(command = %rendered, "running compose");

        let status = Command::new(program)
            .args(&line[1..])
            .status()
            .map_err(|source| LifecycleError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        if !status.success() {
            return Err(LifecycleError::CommandFailed {
                command: rendered,
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}

impl Orchestrator for Compose {
    fn up(&self) -> Result<()> {
        self.provision()?;
        self.run(Action::Up)
    }

    fn down(&self) -> Result<()> {
        self.run(Action::Down)
    }

    fn restart(&self) -> Result<()> {
        self.provision()?;
        self.run(Action::Restart)
    }
}
