//! Command-line interface.

pub mod args;
pub mod deploy;
pub mod output;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::Identity;
use crate::error::Result;

/// Dockhand - resolve a compose stack's .env and drive its lifecycle.
#[derive(Parser, Debug)]
#[command(
    name = "dockhand",
    about = "Resolve a compose stack's .env and drive its lifecycle",
    version,
    args_override_self = true,
    after_help = "Existing .env values are always kept; only missing keys are generated."
)]
pub struct Cli {
    /// Lifecycle action: up, down or restart
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub action: Option<String>,

    /// User the deployment belongs to
    #[arg(
        long,
        default_value = constants::DEFAULT_USER,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub user: String,

    /// Base host name the app is served under
    #[arg(
        long,
        default_value = constants::DEFAULT_HOST,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub host: String,

    /// Scheme of the public webhook URL
    #[arg(
        long,
        default_value = constants::DEFAULT_PROTOCOL,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub protocol: String,

    /// Settings file (default: ./dockhand.toml when present)
    #[arg(long, env = "DOCKHAND_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Compose project name
    #[arg(long, env = "DOCKHAND_PROJECT")]
    pub project: Option<String>,

    /// Configuration store to write
    #[arg(long, env = "DOCKHAND_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// SMTP secret bundle to read
    #[arg(long, env = "DOCKHAND_SECRETS_FILE", value_name = "PATH")]
    pub secrets_file: Option<PathBuf>,

    /// Root of the volume directories
    #[arg(long, env = "DOCKHAND_VOLUME_ROOT", value_name = "PATH")]
    pub volume_root: Option<PathBuf>,

    /// Docker binary providing `compose`
    #[arg(long, env = "DOCKHAND_DOCKER", value_name = "PROGRAM")]
    pub docker: Option<String>,

    /// Write the configuration and print the compose command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Undeclared flags found on the command line.
    #[arg(skip)]
    pub extra: BTreeMap<String, String>,
}

impl Cli {
    /// Parse the process arguments, setting unknown flags aside.
    pub fn parse_lenient() -> std::result::Result<Self, clap::Error> {
        Self::parse_lenient_from(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Parse `args` (program name first), setting unknown flags aside.
    pub fn parse_lenient_from<I>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let split = args::split(args, &Self::command());
        let mut cli = Self::try_parse_from(split.known)?;
        cli.extra = split.extra;
        Ok(cli)
    }

    /// Identity given on the command line.
    pub fn identity(&self) -> Identity {
        Identity::new(&self.user, &self.host, &self.protocol)
    }

    /// Settings from the settings file with flag overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the settings file cannot be loaded or the
    /// result does not validate.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::discover(self.config.as_deref())?;

        if let Some(project) = &self.project {
            settings.project = project.clone();
        }
        if let Some(env_file) = &self.env_file {
            settings.env_file = env_file.clone();
        }
        if let Some(secrets_file) = &self.secrets_file {
            settings.secrets_file = secrets_file.clone();
        }
        if let Some(volume_root) = &self.volume_root {
            settings.volume_root = volume_root.clone();
        }
        if let Some(docker) = &self.docker {
            settings.compose = vec![docker.clone(), "compose".to_string()];
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    deploy::execute(&cli)
}
