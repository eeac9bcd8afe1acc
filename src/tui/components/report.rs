//! # Report Screen
//!
//! Two buttons and the status line. `ReportMenu` tracks which button has
//! focus; the screen component renders it along with the status message it
//! is handed from core state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const REPORT_HEADING: &str = "📄 Test Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEvent {
    SaveAndOpen,
    Share,
}

impl ReportEvent {
    const BUTTONS: [ReportEvent; 2] = [ReportEvent::SaveAndOpen, ReportEvent::Share];

    pub fn label(&self) -> &'static str {
        match self {
            ReportEvent::SaveAndOpen => "💾 Save & Open Report",
            ReportEvent::Share => "📤 Share Report",
        }
    }

    fn shortcut(&self) -> char {
        match self {
            ReportEvent::SaveAndOpen => 's',
            ReportEvent::Share => 'h',
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportMenu {
    pub focused: usize,
}

impl ReportMenu {
    pub fn focused_button(&self) -> ReportEvent {
        ReportEvent::BUTTONS[self.focused % ReportEvent::BUTTONS.len()]
    }

    fn move_focus(&mut self, forward: bool) {
        let len = ReportEvent::BUTTONS.len();
        self.focused = if forward {
            (self.focused + 1) % len
        } else {
            (self.focused + len - 1) % len
        };
    }
}

impl EventHandler for ReportMenu {
    type Event = ReportEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ReportEvent> {
        match event {
            TuiEvent::Submit => Some(self.focused_button()),
            TuiEvent::InputChar(c) => ReportEvent::BUTTONS
                .into_iter()
                .position(|button| button.shortcut() == c.to_ascii_lowercase())
                .map(|index| {
                    self.focused = index;
                    ReportEvent::BUTTONS[index]
                }),
            TuiEvent::Down | TuiEvent::Tab => {
                self.move_focus(true);
                None
            }
            TuiEvent::Up | TuiEvent::BackTab => {
                self.move_focus(false);
                None
            }
            _ => None,
        }
    }
}

pub struct ReportScreen<'a> {
    pub status_message: &'a str,
    pub menu: &'a ReportMenu,
}

impl Component for ReportScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [heading_area, _, save_area, share_area, _, status_area] = Layout::vertical([
            Length(1),
            Length(1),
            Length(3),
            Length(3),
            Length(1),
            Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(
                REPORT_HEADING,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            heading_area,
        );

        let focused = self.menu.focused_button();
        for (button, button_area) in ReportEvent::BUTTONS.iter().zip([save_area, share_area]) {
            let style = if *button == focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let title = format!("[{}]", button.shortcut());
            let widget = Paragraph::new(button.label())
                .centered()
                .style(style)
                .block(Block::bordered().title(title));
            frame.render_widget(widget, button_area);
        }

        if !self.status_message.trim().is_empty() {
            let status = Paragraph::new(self.status_message).wrap(Wrap { trim: true });
            frame.render_widget(status, status_area);
        }
    }
}
