//! # Core Application Logic
//!
//! Greeting, navigation and the report flow. Knows nothing about terminals,
//! filesystems or which program opens a text file.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • ReportFlow (effects) │
//!                    └───────────┬─────────────┘
//!                                │ traits
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ FileStore  │      │   Sharer   │
//!     │ (ratatui)  │      │  (disk)    │      │ (commands) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `GreetingInput`
//! - [`action`]: The `Action` enum and `update()`
//! - [`screen`]: Screen ids and the navigation controller
//! - [`report`]: Report content, `FileStore`, `ReportWriter`
//! - [`intent`]: Host requests, `Sharer`, `ReportLauncher`
//! - [`flow`]: Executes report effects
//! - [`dashboard`]: Static dashboard content
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod dashboard;
pub mod flow;
pub mod intent;
pub mod report;
pub mod screen;
pub mod state;
