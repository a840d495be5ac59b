//! Stack lifecycle.
//!
//! Maps an action name onto an [`Orchestrator`], the seam between dockhand and
//! whatever actually runs the containers.
//!
//! ## Adding a New Orchestrator
//!
//! 1. Implement the `Orchestrator` trait
//! 2. Add the implementation in a new file next to `compose.rs`
//! 3. Re-export from this module

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::error::{Error, LifecycleError, Result};

mod compose;

pub use compose::Compose;

/// A lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the stack, detached.
    Up,
    /// Stop the stack and remove its volumes.
    Down,
    /// Recreate the running services.
    Restart,
}

impl Action {
    /// Parse an optional action name.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::NoAction` for `None` and
    /// `LifecycleError::UnrecognizedAction` for any unknown name.
    pub fn parse(name: Option<&str>) -> Result<Self> {
        name.ok_or(LifecycleError::NoAction)?.parse()
    }

    /// Action name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Restart => "restart",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            "restart" => Ok(Action::Restart),
            other => Err(LifecycleError::UnrecognizedAction(other.to_string()).into()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can start, stop and restart the stack.
///
/// Each call blocks until the underlying operation finishes.
pub trait Orchestrator {
    /// Bring the declared services up, detached.
    fn up(&self) -> Result<()>;

    /// Bring the services down and remove their persistent volumes.
    fn down(&self) -> Result<()>;

    /// Forcibly recreate the running services.
    fn restart(&self) -> Result<()>;
}

impl<T: Orchestrator + ?Sized> Orchestrator for &T {
    fn up(&self) -> Result<()> {
        (**self).up()
    }

    fn down(&self) -> Result<()> {
        (**self).down()
    }

    fn restart(&self) -> Result<()> {
        (**self).restart()
    }
}

impl<T: Orchestrator + ?Sized> Orchestrator for Box<T> {
    fn up(&self) -> Result<()> {
        (**self).up()
    }

    fn down(&self) -> Result<()> {
        (**self).down()
    }

    fn restart(&self) -> Result<()> {
        (**self).restart()
    }
}

/// Run exactly one orchestrator operation for `action`.
pub fn dispatch<O: Orchestrator + ?Sized>(action: Action, orchestrator: &O) -> Result<()> {
    info!(action = %action, "dispatching");

    match action {
        Action::Up => orchestrator.up(),
        Action::Down => orchestrator.down(),
        Action::Restart => orchestrator.restart(),
    }
}
