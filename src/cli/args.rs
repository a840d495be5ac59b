//! Lenient flag handling.
//!
//! Deploy scripts pass whatever flags they were written with. Flags dockhand
//! does not declare are set aside (with their values) before clap sees the
//! command line, so they never fail a deployment.
//!
//! Grammar: `--name value`, `--name=value`, or a bare `--name`. A value is the
//! next token unless it starts with `--`; a bare unknown flag records `"true"`.
//! Tokens that are neither a flag nor a flag's value are ignored.

use std::collections::BTreeMap;
use std::iter::Peekable;

use clap::Command;
use tracing::debug;

/// A command line split into what clap should parse and what it should not see.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Split {
    /// Program name followed by the declared flags, normalized to `--name=value`.
    pub known: Vec<String>,
    /// Undeclared flags and their values.
    pub extra: BTreeMap<String, String>,
}

/// Split `args` (program name first) against the flags `command` declares.
pub fn split(args: impl IntoIterator<Item = String>, command: &Command) -> Split {
    let mut command = command.clone();
    command.build();

    let mut args = args.into_iter().peekable();
    let mut split = Split::default();

    if let Some(program) = args.next() {
        split.known.push(program);
    }

    while let Some(arg) = args.next() {
        if let Some(flag) = arg.strip_prefix("--") {
            if flag.is_empty() {
                debug!("ignoring bare `--`");
                continue;
            }

            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };

            match takes_value(&command, name) {
                Some(true) => match inline.or_else(|| next_value(&mut args)) {
                    Some(value) => split.known.push(format!("--{}={}", name, value)),
                    None => split.known.push(format!("--{}", name)),
                },
                Some(false) => split.known.push(arg.clone()),
                None => {
                    let value = inline
                        .or_else(|| next_value(&mut args))
                        .unwrap_or_else(|| "true".to_string());
                    debug!(flag = %name, value = %value, "ignoring unknown flag");
                    split.extra.insert(name.to_string(), value);
                }
            }
        } else if is_short_flags(&command, &arg) {
            split.known.push(arg);
        } else {
            debug!(arg = %arg, "ignoring stray argument");
        }
    }

    split
}

/// `Some(takes_value)` for a declared long flag, `None` for an unknown one.
fn takes_value(command: &Command, name: &str) -> Option<bool> {
    command
        .get_arguments()
        .find(|arg| arg.get_long() == Some(name))
        .map(|arg| arg.get_action().takes_values())
}

/// Whether `arg` is a cluster of declared short switches such as `-v` or `-vh`.
fn is_short_flags(command: &Command, arg: &str) -> bool {
    let Some(shorts) = arg.strip_prefix('-') else {
        return false;
    };

    !shorts.is_empty()
        && shorts.chars().all(|c| {
            command
                .get_arguments()
                .any(|a| a.get_short() == Some(c) && !a.get_action().takes_values())
        })
}

fn next_value<I: Iterator<Item = String>>(args: &mut Peekable<I>) -> Option<String> {
    args.next_if(|next| !next.starts_with("--"))
}
