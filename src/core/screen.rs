//! # Screens and Navigation
//!
//! The app has exactly three screens. One is active at a time and the only
//! way to change it is an explicit navigation request.
//!
//! ```text
//!   greeting ─ ─ ─▶ dashboard ───▶ report
//!      ▲  (host keys)                │
//!      └──────────── back ◀──────────┘  (single parent only)
//! ```
//!
//! `NavigationController` remembers one parent screen so the host's back
//! gesture (Esc in the TUI) has somewhere to go. There is no deeper history.

use std::fmt;
use std::str::FromStr;

/// One named, mutually exclusive view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScreenId {
    #[default]
    Greeting,
    Dashboard,
    Report,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::Greeting, ScreenId::Dashboard, ScreenId::Report];

    /// Navigation token used in config files, CLI flags and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Greeting => "greeting",
            ScreenId::Dashboard => "dashboard",
            ScreenId::Report => "report",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Greeting => "Greeting",
            ScreenId::Dashboard => "Dashboard",
            ScreenId::Report => "Test Report",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a navigation token names no known screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScreenError(pub String);

impl fmt::Display for ParseScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown screen '{}' (expected greeting, dashboard or report)",
            self.0
        )
    }
}

impl std::error::Error for ParseScreenError {}

impl FromStr for ScreenId {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s.trim())
            .ok_or_else(|| ParseScreenError(s.to_string()))
    }
}

/// Something that owns the active screen and can move it.
pub trait Navigator {
    fn current(&self) -> ScreenId;

    /// Move to `target` unconditionally. No guards, no cancellation.
    fn navigate(&mut self, target: ScreenId);

    /// Return to the parent screen. Returns `false` when there is none.
    fn back(&mut self) -> bool;
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    current: ScreenId,
    parent: Option<ScreenId>,
}

impl NavigationController {
    pub fn new(start: ScreenId) -> Self {
        Self {
            current: start,
            parent: None,
        }
    }

    pub fn parent(&self) -> Option<ScreenId> {
        self.parent
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(ScreenId::default())
    }
}

impl Navigator for NavigationController {
    fn current(&self) -> ScreenId {
        self.current
    }

    fn navigate(&mut self, target: ScreenId) {
        log::debug!("navigate: {} -> {}", self.current, target);
        if target != self.current {
            self.parent = Some(self.current);
        }
        self.current = target;
    }

    fn back(&mut self) -> bool {
        match self.parent.take() {
            Some(parent) => {
                log::debug!("back: {} -> {}", self.current, parent);
                self.current = parent;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(screen.as_str().parse::<ScreenId>(), Ok(screen));
        }
        assert_eq!("report".parse::<ScreenId>(), Ok(ScreenId::Report));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "settings".parse::<ScreenId>().unwrap_err();
        assert_eq!(err, ParseScreenError("settings".to_string()));
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_initial_screen_is_greeting() {
        let nav = NavigationController::default();
        assert_eq!(nav.current(), ScreenId::Greeting);
        assert_eq!(nav.parent(), None);
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut nav = NavigationController::default();
        nav.navigate(ScreenId::Report);
        assert_eq!(nav.current(), ScreenId::Report);
        nav.navigate(ScreenId::Greeting);
        assert_eq!(nav.current(), ScreenId::Greeting);
    }

    #[test]
    fn test_back_has_single_parent() {
        let mut nav = NavigationController::new(ScreenId::Dashboard);
        nav.navigate(ScreenId::Report);
        assert!(nav.back());
        assert_eq!(nav.current(), ScreenId::Dashboard);
        // Only one level is remembered
        assert!(!nav.back());
        assert_eq!(nav.current(), ScreenId::Dashboard);
    }

    #[test]
    fn test_navigate_to_same_screen_keeps_parent() {
        let mut nav = NavigationController::new(ScreenId::Dashboard);
        nav.navigate(ScreenId::Report);
        nav.navigate(ScreenId::Report);
        assert_eq!(nav.parent(), Some(ScreenId::Dashboard));
    }
}
