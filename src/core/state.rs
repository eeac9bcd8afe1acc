//! # Application State
//!
//! Core state for hellodash. Domain data only; presentation state (cursor
//! position, focused button, scroll offset) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationController  // active screen + single parent
//! ├── greeting: GreetingInput           // typed name + derived greeting
//! └── status_message: String            // outcome of last report action
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::screen::{NavigationController, Navigator, ScreenId};

/// The name being typed and the greeting derived from it. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingInput {
    pub name: String,
    pub greeting: String,
}

impl GreetingInput {
    /// Derive the greeting from the current name.
    ///
    /// Blank names are a no-op so an empty greeting never flashes up.
    /// Returns whether the greeting changed.
    pub fn greet(&mut self) -> bool {
        if self.name.trim().is_empty() {
            return false;
        }
        self.greeting = format!("Hello, {}!", self.name);
        true
    }
}

pub struct App {
    pub navigation: NavigationController,
    pub greeting: GreetingInput,
    pub status_message: String,
}

impl App {
    pub fn new(start: ScreenId) -> Self {
        Self {
            navigation: NavigationController::new(start),
            greeting: GreetingInput::default(),
            status_message: String::new(),
        }
    }

    pub fn screen(&self) -> ScreenId {
        self.navigation.current()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScreenId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::default();
        assert_eq!(app.screen(), ScreenId::Greeting);
        assert!(app.greeting.name.is_empty());
        assert!(app.greeting.greeting.is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_greet_formats_name() {
        let mut input = GreetingInput {
            name: "Ada".to_string(),
            ..Default::default()
        };
        assert!(input.greet());
        assert_eq!(input.greeting, "Hello, Ada!");
    }

    #[test]
    fn test_greet_keeps_surrounding_whitespace_of_non_blank_name() {
        let mut input = GreetingInput {
            name: " Grace ".to_string(),
            ..Default::default()
        };
        input.greet();
        assert_eq!(input.greeting, "Hello,  Grace !");
    }

    #[test]
    fn test_blank_greet_is_noop() {
        let mut input = GreetingInput {
            name: "Ada".to_string(),
            ..Default::default()
        };
        input.greet();

        for blank in ["", "   ", "\t \n"] {
            input.name = blank.to_string();
            assert!(!input.greet());
            assert_eq!(input.greeting, "Hello, Ada!");
        }
    }
}
