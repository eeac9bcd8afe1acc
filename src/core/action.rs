//! # Actions
//!
//! Everything that can happen in hellodash becomes an `Action`.
//! User presses Enter on the greeting screen? That's `Action::Greet`.
//! The report finished saving? That's `Action::ReportSaved(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`.
//! No I/O happens here; effects that need the filesystem or the host are
//! carried out by `ReportFlow`, which answers with another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                              │
//!                       ReportFlow::perform ◀──┘
//!                                │
//!                     Action::Report{Saved,Shared}
//! ```

use crate::core::report::{FileHandle, ReportError};
use crate::core::screen::{Navigator, ScreenId};
use crate::core::state::App;

pub const STATUS_SAVED_AND_OPENED: &str = "Report saved and opened.";
pub const STATUS_SHARING: &str = "Sharing report...";
pub const STATUS_NOT_FOUND: &str = "Report file not found.";

#[derive(Debug)]
pub enum Action {
    /// The name field changed.
    EditName(String),
    /// Derive the greeting from the current name.
    Greet,
    Navigate(ScreenId),
    /// Host back gesture.
    Back,
    SaveAndOpenReport,
    ShareReport,
    /// Outcome of a save & open.
    ReportSaved(Result<FileHandle, ReportError>),
    /// Outcome of a share.
    ReportShared(Result<FileHandle, ReportError>),
    Quit,
}

/// Work the caller must do after `update()` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SaveAndOpenReport,
    ShareReport,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    log::debug!("update: {:?}", action);
    match action {
        Action::EditName(name) => {
            app.greeting.name = name;
            Effect::None
        }
        Action::Greet => {
            if !app.greeting.greet() {
                log::debug!("Greet ignored: blank name");
            }
            Effect::None
        }
        Action::Navigate(target) => {
            app.navigation.navigate(target);
            app.status_message.clear();
            Effect::None
        }
        Action::Back => {
            if app.navigation.back() {
                app.status_message.clear();
                Effect::None
            } else {
                Effect::Quit
            }
        }
        Action::SaveAndOpenReport => Effect::SaveAndOpenReport,
        Action::ShareReport => Effect::ShareReport,
        Action::ReportSaved(result) => {
            app.status_message = match result {
                Ok(_) => STATUS_SAVED_AND_OPENED.to_string(),
                Err(e) => format!("Failed to save report: {e}"),
            };
            Effect::None
        }
        Action::ReportShared(result) => {
            app.status_message = match result {
                Ok(_) => STATUS_SHARING.to_string(),
                Err(ReportError::NotFound(_)) => STATUS_NOT_FOUND.to_string(),
                Err(e) => format!("Failed to share report: {e}"),
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn greet_with(app: &mut App, name: &str) {
        update(app, Action::EditName(name.to_string()));
        update(app, Action::Greet);
    }

    #[test]
    fn test_greet_non_blank_names() {
        let mut app = App::default();
        for name in ["Ada", "x", "Grace Hopper", "  Linus", "名前"] {
            greet_with(&mut app, name);
            assert_eq!(app.greeting.greeting, format!("Hello, {name}!"));
        }
    }

    #[test]
    fn test_blank_greet_leaves_initial_greeting_empty() {
        let mut app = App::default();
        greet_with(&mut app, "   ");
        assert_eq!(app.greeting.greeting, "");
    }

    #[test]
    fn test_blank_greet_leaves_previous_greeting() {
        let mut app = App::default();
        greet_with(&mut app, "Ada");
        greet_with(&mut app, "");
        assert_eq!(app.greeting.greeting, "Hello, Ada!");
        assert_eq!(app.greeting.name, "");
    }

    #[test]
    fn test_navigate_to_report_from_any_screen_clears_status() {
        for start in ScreenId::ALL {
            let mut app = App::new(start);
            app.status_message = "Report saved and opened.".to_string();
            let effect = update(&mut app, Action::Navigate(ScreenId::Report));
            assert_eq!(effect, Effect::None);
            assert_eq!(app.screen(), ScreenId::Report);
            assert!(app.status_message.is_empty());
        }
    }

    #[test]
    fn test_back_returns_to_parent_then_quits() {
        let mut app = App::new(ScreenId::Dashboard);
        update(&mut app, Action::Navigate(ScreenId::Report));
        app.status_message = STATUS_SHARING.to_string();

        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.screen(), ScreenId::Dashboard);
        assert!(app.status_message.is_empty());

        assert_eq!(update(&mut app, Action::Back), Effect::Quit);
    }

    #[test]
    fn test_report_actions_request_effects() {
        let mut app = App::new(ScreenId::Report);
        assert_eq!(update(&mut app, Action::SaveAndOpenReport), Effect::SaveAndOpenReport);
        assert_eq!(update(&mut app, Action::ShareReport), Effect::ShareReport);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_report_saved_status() {
        let mut app = App::new(ScreenId::Report);
        update(&mut app, Action::ReportSaved(Ok(FileHandle::new("/r/report.txt"))));
        assert_eq!(app.status_message, "Report saved and opened.");

        let err = ReportError::IoFailure {
            path: PathBuf::from("/r/report.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        update(&mut app, Action::ReportSaved(Err(err)));
        assert!(app.status_message.starts_with("Failed to save report:"));
        assert!(app.status_message.contains("permission denied"));
    }

    #[test]
    fn test_report_shared_status() {
        let mut app = App::new(ScreenId::Report);
        update(
            &mut app,
            Action::ReportShared(Err(ReportError::NotFound("report.txt".to_string()))),
        );
        assert_eq!(app.status_message, "Report file not found.");

        update(&mut app, Action::ReportShared(Ok(FileHandle::new("/r/report.txt"))));
        assert_eq!(app.status_message, "Sharing report...");
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
