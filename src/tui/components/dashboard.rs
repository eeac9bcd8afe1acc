//! # Dashboard Screen
//!
//! Welcome text, the greeting (if any), two stat cards, the recent activity
//! list and a "View Test Report" button. The content is taller than most
//! terminals, so it sits inside a `ScrollView`.
//!
//! ```text
//! Welcome to Dashboard!
//! Hello, Ada!
//! ┌Tasks─────┐ ┌Completed─┐
//! │ 12       │ │ 8        │
//! └──────────┘ └──────────┘
//! Recent Activity
//! ┌────────────────────────┐
//! │ATM Simulator Completed │
//! │2025-08-18              │
//! └────────────────────────┘
//! ...
//! [ 📊 View Test Report ]
//! ```

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::dashboard::{Activity, StatCard, WELCOME_TEXT, recent_activity, stat_cards};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const VIEW_REPORT_LABEL: &str = "📊 View Test Report";

const CARD_WIDTH: u16 = 20;
const CARD_HEIGHT: u16 = 4;
const ACTIVITY_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    ViewReport,
}

/// Scroll position of the dashboard (TUI-only state).
#[derive(Default)]
pub struct DashboardState {
    pub scroll: ScrollViewState,
}

impl EventHandler for DashboardState {
    type Event = DashboardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DashboardEvent> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('r') => return Some(DashboardEvent::ViewReport),
            TuiEvent::Up => self.scroll.scroll_up(),
            TuiEvent::Down => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            TuiEvent::Home => self.scroll.scroll_to_top(),
            TuiEvent::End => self.scroll.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

pub struct DashboardScreen<'a> {
    pub greeting: &'a str,
    pub state: &'a mut DashboardState,
}

impl DashboardScreen<'_> {
    fn content_height(&self, activities: usize) -> u16 {
        let greeting_rows = u16::from(!self.greeting.trim().is_empty());
        // welcome + blank + greeting + cards + blank + heading + list + blank + button
        1 + 1 + greeting_rows + CARD_HEIGHT + 1 + 1 + ACTIVITY_HEIGHT * activities as u16 + 1 + BUTTON_HEIGHT
    }
}

fn stat_card(card: &StatCard) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        card.value.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::bordered().title(card.title))
}

fn activity_item(activity: &Activity) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(activity.title),
        Line::from(Span::styled(
            activity.date_label(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::bordered())
}

impl Component for DashboardScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let activities = recent_activity();
        let width = area.width.saturating_sub(1); // scrollbar column
        let height = self.content_height(activities.len());

        let mut view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        view.render_widget(
            Line::from(Span::styled(
                WELCOME_TEXT,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Rect::new(0, y, width, 1),
        );
        y += 2;

        if !self.greeting.trim().is_empty() {
            view.render_widget(
                Line::from(Span::styled(self.greeting, Style::default().fg(Color::Green))),
                Rect::new(0, y, width, 1),
            );
            y += 1;
        }

        for (i, card) in stat_cards().iter().enumerate() {
            let x = (CARD_WIDTH + 1) * i as u16;
            let card_width = CARD_WIDTH.min(width.saturating_sub(x));
            view.render_widget(stat_card(card), Rect::new(x, y, card_width, CARD_HEIGHT));
        }
        y += CARD_HEIGHT + 1;

        view.render_widget(
            Line::from(Span::styled(
                "Recent Activity",
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Rect::new(0, y, width, 1),
        );
        y += 1;

        for activity in &activities {
            view.render_widget(activity_item(activity), Rect::new(0, y, width, ACTIVITY_HEIGHT));
            y += ACTIVITY_HEIGHT;
        }
        y += 1;

        let button = Paragraph::new(VIEW_REPORT_LABEL)
            .centered()
            .block(Block::bordered().border_style(Style::default().fg(Color::Cyan)));
        view.render_widget(button, Rect::new(0, y, width, BUTTON_HEIGHT));

        frame.render_stateful_widget(view, area, &mut self.state.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(greeting: &str, state: &mut DashboardState, height: u16) -> String {
        let backend = TestBackend::new(60, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DashboardScreen { greeting, state }.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_cards_and_activity() {
        let mut state = DashboardState::default();
        let text = rendered("", &mut state, 60);
        assert!(text.contains(WELCOME_TEXT));
        assert!(text.contains("Tasks"));
        assert!(text.contains("12"));
        assert!(text.contains("Completed"));
        assert!(text.contains("Recent Activity"));
        assert!(text.contains("ATM Simulator Completed"));
        assert!(text.contains("UI Test Passed"));
        assert!(text.contains("2025-08-18"));
        assert!(text.contains("View Test Report"));
    }

    #[test]
    fn test_renders_greeting_when_set() {
        let mut state = DashboardState::default();
        assert!(rendered("Hello, Ada!", &mut state, 60).contains("Hello, Ada!"));
    }

    #[test]
    fn test_enter_views_report() {
        let mut state = DashboardState::default();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(DashboardEvent::ViewReport));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('r')), Some(DashboardEvent::ViewReport));
        assert_eq!(state.handle_event(&TuiEvent::Down), None);
    }

    #[test]
    fn test_scroll_down_moves_offset() {
        let mut state = DashboardState::default();
        // Render once so the view knows its size
        rendered("", &mut state, 10);
        state.handle_event(&TuiEvent::Down);
        assert_eq!(state.scroll.offset().y, 1);
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.scroll.offset().y, 0);
    }

    #[test]
    fn test_content_height_grows_with_greeting() {
        let mut state = DashboardState::default();
        let without = DashboardScreen { greeting: "", state: &mut state }.content_height(5);
        let with = DashboardScreen { greeting: "Hi", state: &mut state }.content_height(5);
        assert_eq!(with, without + 1);
    }
}
