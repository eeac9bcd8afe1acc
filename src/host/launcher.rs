//! # Command Launcher
//!
//! Desktop stand-in for the host's view/send choosers: each request kind maps
//! to a configured command line, which is spawned with the file path as its
//! last argument. Dispatch does not block on the child; a detached thread
//! waits for it so it never lingers as a zombie.
//!
//! The read grant has no desktop equivalent; the file already belongs to the
//! user, so it is not consulted here.

use std::process::{Child, Command, Stdio};
use std::thread;

use crate::core::config::{CommandSpec, ResolvedConfig};
use crate::core::intent::{IntentAction, IntentRequest, LaunchError, Sharer};

pub struct CommandSharer {
    open_command: Vec<String>,
    share_command: Vec<String>,
}

impl CommandSharer {
    pub fn new(open_command: &str, share_command: &str) -> Self {
        Self::from_specs(&CommandSpec::from(open_command), &CommandSpec::from(share_command))
    }

    pub fn from_specs(open_command: &CommandSpec, share_command: &CommandSpec) -> Self {
        Self {
            open_command: open_command.argv(),
            share_command: share_command.argv(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::from_specs(&config.open_command, &config.share_command)
    }

    /// The program and arguments that would handle `request`.
    pub fn command_line(&self, request: &IntentRequest) -> Result<Vec<String>, LaunchError> {
        let base = match request.action {
            IntentAction::View => &self.open_command,
            IntentAction::Send => &self.share_command,
        };
        let file = request.file().ok_or(LaunchError::NoHandler(request.action))?;
        if base.is_empty() {
            return Err(LaunchError::NoHandler(request.action));
        }
        let mut line = base.clone();
        line.push(file.path().display().to_string());
        Ok(line)
    }
}

/// Wait for `child` off the UI thread.
fn reap(mut child: Child, command: String) {
    let spawned = thread::Builder::new()
        .name("hellodash-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => log::debug!("{} exited with {}", command, status),
            Err(e) => log::warn!("Failed to wait for {}: {}", command, e),
        });
    if let Err(e) = spawned {
        log::warn!("Could not start reaper thread: {}", e);
    }
}

impl Sharer for CommandSharer {
    fn dispatch(&mut self, request: &IntentRequest) -> Result<(), LaunchError> {
        let line = self.command_line(request)?;
        let (program, args) = line
            .split_first()
            .ok_or(LaunchError::NoHandler(request.action))?;
        log::debug!("{}: spawning {:?}", request.chooser_title, line);

        let command = line.join(" ");
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                command: command.clone(),
                source,
            })?;
        reap(child, command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::FileHandle;

    #[test]
    fn test_command_line_per_action() {
        let sharer = CommandSharer::new("xdg-open", "open -R");
        let file = FileHandle::new("/docs/report.txt");

        assert_eq!(
            sharer.command_line(&IntentRequest::view(&file)).unwrap(),
            vec!["xdg-open", "/docs/report.txt"]
        );
        assert_eq!(
            sharer.command_line(&IntentRequest::send(&file)).unwrap(),
            vec!["open", "-R", "/docs/report.txt"]
        );
    }

    #[test]
    fn test_spaced_argument_survives_from_array() {
        let open = CommandSpec::Args(vec!["open".into(), "-a".into(), "Text Edit".into()]);
        let sharer = CommandSharer::from_specs(&open, &CommandSpec::from("open -R"));
        let file = FileHandle::new("/docs/report.txt");
        assert_eq!(
            sharer.command_line(&IntentRequest::view(&file)).unwrap(),
            vec!["open", "-a", "Text Edit", "/docs/report.txt"]
        );
    }

    /// Children of this process that have exited but not been waited on.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "<pid> (<comm>) <state> <ppid> ..."; comm may contain spaces
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_finished_viewers_are_reaped() {
        let mut sharer = CommandSharer::new("true", "true");
        let file = FileHandle::new("/docs/report.txt");
        for _ in 0..5 {
            sharer.dispatch(&IntentRequest::view(&file)).unwrap();
            sharer.dispatch(&IntentRequest::send(&file)).unwrap();
        }

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while zombie_children() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert_eq!(zombie_children(), 0);
    }

    #[test]
    fn test_empty_command_has_no_handler() {
        let mut sharer = CommandSharer::new("xdg-open", "   ");
        let file = FileHandle::new("/docs/report.txt");
        let err = sharer.dispatch(&IntentRequest::send(&file)).unwrap_err();
        assert!(matches!(err, LaunchError::NoHandler(IntentAction::Send)));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut sharer = CommandSharer::new("hellodash-no-such-viewer-binary", "");
        let file = FileHandle::new("/docs/report.txt");
        let err = sharer.dispatch(&IntentRequest::view(&file)).unwrap_err();
        match err {
            LaunchError::Spawn { command, .. } => {
                assert_eq!(command, "hellodash-no-such-viewer-binary /docs/report.txt")
            }
            other => panic!("expected Spawn, got {other:?}"),
        }
    }
}
