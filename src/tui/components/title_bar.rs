//! # TitleBar Component
//!
//! Top status bar: app name, active screen, and the status message.
//!
//! Stateless. All three props come from core state; the bar only decides
//! how to format them:
//!
//! 1. **Status message**: `"hellodash [report] | Sharing report..."`
//! 2. **Default**: `"hellodash [report]"`

use crate::core::screen::ScreenId;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub screen: ScreenId,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen: ScreenId, status_message: &'a str) -> Self {
        Self {
            screen,
            status_message,
        }
    }

    pub fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("hellodash [{}]", self.screen)
        } else {
            format!("hellodash [{}] | {}", self.screen, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
