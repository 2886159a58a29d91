//! Building and running the command which launches a game through its platform.

use std::{
    io,
    process::{Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use cfg_if::cfg_if;
use tracing::{debug, error};

use crate::data::{CatalogEntry, Platform};

/// How a platform's launch command is built from a game's external ID: the ID is appended
/// directly to `prefix`, with nothing in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchTemplate {
    pub prefix: &'static str,
}

impl LaunchTemplate {
    pub fn render(&self, external_id: &str) -> String {
        format!("{}{external_id}", self.prefix)
    }
}

/// Launch template for each platform.
///
/// NOTE: the Epic template has no space between `launch` and the ID, and the GOG template reads
/// `lpaunch` rather than `launch`. Existing handlers match these exact strings.
pub fn launch_template(platform: Platform) -> LaunchTemplate {
    match platform {
        Platform::Steam => LaunchTemplate {
            prefix: "xdg-open steam://rungameid/",
        },
        Platform::Epic => LaunchTemplate {
            prefix: "legendary launch",
        },
        Platform::Gog => LaunchTemplate {
            prefix: "heroic://lpaunch/",
        },
    }
}

/// Returns the shell command which launches the given game
pub fn build_launch_command(entry: &CatalogEntry) -> String {
    launch_template(entry.platform()).render(entry.external_id())
}

/// Same as [`build_launch_command`], for a platform given by name. Unknown platforms produce an
/// empty command, which [`execute`] ignores.
pub fn build_launch_command_for(platform: &str, external_id: &str) -> String {
    platform
        .parse::<Platform>()
        .map(|p| launch_template(p).render(external_id))
        .unwrap_or_default()
}

cfg_if! {
    if #[cfg(windows)] {
        const SHELL: (&str, &str) = ("cmd", "/C");
    } else {
        const SHELL: (&str, &str) = ("sh", "-c");
    }
}

/// Returns the [`Command`] which runs `command` through the system shell, or `None` for an empty
/// command
pub fn shell_command(command: &str) -> Option<Command> {
    if command.is_empty() {
        return None;
    }

    let (program, flag) = SHELL;
    let mut shell = Command::new(program);
    shell
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    Some(shell)
}

/// Spawns the given command, and a background thread which waits on it so the finished process
/// doesn't linger as a zombie. The caller never has to join the returned handle.
fn spawn_and_reap(mut shell: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = shell.spawn()?;

    Ok(thread::spawn(move || {
        let status = child.wait();
        debug!("Launch command exited: {status:?}");
        status
    }))
}

/// Runs the given command without waiting for it. Whether the game actually started is never
/// checked; failing to spawn the shell is only logged.
pub fn execute(command: &str) {
    let Some(shell) = shell_command(command) else {
        debug!("Empty launch command, nothing to execute");
        return;
    };

    debug!("Executing launch command: {command:?}");

    if let Err(e) = spawn_and_reap(shell) {
        error!("Failed to execute launch command {command:?}:\n{e}");
    }
}

/// Builds and executes the launch command for the given game
pub fn launch(entry: &CatalogEntry) {
    execute(&build_launch_command(entry));
}
