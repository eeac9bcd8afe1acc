//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Global keys are checked first (Ctrl+C, F1–F3, Esc). Everything else goes
//! to the component that owns the active screen, and whatever high-level
//! event it emits is mapped to an `Action`. Actions are applied with
//! `update()`; report effects run synchronously through `ReportFlow` before
//! the next frame is drawn.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event. It sleeps up
//! to 500ms waiting for input.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::flow::ReportFlow;
use crate::core::intent::Sharer;
use crate::core::report::FileStore;
use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::host::{CommandSharer, DiskFileStore};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DashboardEvent, DashboardState, NameEvent, NameInput, ReportEvent, ReportMenu,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub name_input: NameInput,
    pub dashboard: DashboardState,
    pub report_menu: ReportMenu,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_input: NameInput::new(),
            dashboard: DashboardState::default(),
            report_menu: ReportMenu::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the closure when dropped, including on early `?` returns.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    /// Best effort: the app works without these modes, so failure is only logged.
    fn new() -> Self {
        match execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for the name field
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        ) {
            Ok(()) => info!("Terminal modes enabled (bracketed paste, steady block cursor)"),
            Err(e) => warn!("Failed to enable terminal modes: {}", e),
        }
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Map a terminal event to a core action, updating presentation state on the way.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ShowScreen(screen) => return Some(Action::Navigate(*screen)),
        TuiEvent::Escape => return Some(Action::Back),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.screen() {
        ScreenId::Greeting => match tui.name_input.handle_event(event)? {
            NameEvent::Changed(name) => Some(Action::EditName(name)),
            NameEvent::Submit => Some(Action::Greet),
        },
        ScreenId::Dashboard => match tui.dashboard.handle_event(event)? {
            DashboardEvent::ViewReport => Some(Action::Navigate(ScreenId::Report)),
        },
        ScreenId::Report => match tui.report_menu.handle_event(event)? {
            ReportEvent::SaveAndOpen => Some(Action::SaveAndOpenReport),
            ReportEvent::Share => Some(Action::ShareReport),
        },
    }
}

/// Apply an action and run whatever effect it asks for.
/// Returns the effect so the caller can see `Effect::Quit`.
pub fn dispatch<F: FileStore, S: Sharer>(
    app: &mut App,
    flow: &mut ReportFlow<F, S>,
    action: Action,
) -> Effect {
    let effect = update(app, action);
    if let Some(outcome) = flow.perform(&effect) {
        update(app, outcome);
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.start_screen);
    let mut tui = TuiState::new();
    let mut flow = ReportFlow::new(
        DiskFileStore::new(&config.report_dir),
        CommandSharer::from_config(&config),
    );
    info!(
        "Starting on {} (reports in {})",
        config.start_screen,
        config.report_dir.display()
    );

    let mut terminal = ratatui::init();
    // Declared in this order so modes are reset before the terminal is restored
    let _restore = OnDrop(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };
            if dispatch(&mut app, &mut flow, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    Ok(())
}
