//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as struct fields:
//! - `TitleBar`: app name, active screen, status message
//! - `GreetingScreen`, `DashboardScreen`, `ReportScreen`: one per screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Own presentation state and emit high-level events:
//! - `NameInput`: text field, emits `NameEvent`
//! - `DashboardState`: scroll offset, emits `DashboardEvent`
//! - `ReportMenu`: focused button, emits `ReportEvent`
//!
//! Screen components borrow the stateful ones for the length of a render,
//! so core data stays in `App` and presentation data stays in `TuiState`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── name_input.rs    (Single-line name field)
//! ├── greeting.rs      (Greeting screen)
//! ├── dashboard.rs     (Stat cards + activity list)
//! └── report.rs        (Save / share buttons)
//! ```

pub mod dashboard;
pub mod greeting;
pub mod name_input;
pub mod report;
mod title_bar;

pub use dashboard::{DashboardEvent, DashboardScreen, DashboardState};
pub use greeting::GreetingScreen;
pub use name_input::{NameEvent, NameInput};
pub use report::{ReportEvent, ReportMenu, ReportScreen};
pub use title_bar::TitleBar;
