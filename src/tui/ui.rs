use crate::core::screen::ScreenId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DashboardScreen, GreetingScreen, ReportScreen, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

const KEY_HINTS: &str = "F1 greeting · F2 dashboard · F3 report · Esc back · Ctrl+C quit";

/// Render the active screen. Reads core state, only mutates presentation state.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(app.screen(), &app.status_message).render(frame, title_area);

    let screen = app.screen();
    let body = Block::bordered().title(screen.title());
    let inner = body.inner(main_area);
    frame.render_widget(body, main_area);
    draw_screen(frame, inner, screen, app, tui);

    frame.render_widget(
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        hint_area,
    );
}

fn draw_screen(frame: &mut Frame, area: Rect, screen: ScreenId, app: &App, tui: &mut TuiState) {
    match screen {
        ScreenId::Greeting => GreetingScreen {
            greeting: &app.greeting.greeting,
            input: &mut tui.name_input,
        }
        .render(frame, area),
        ScreenId::Dashboard => DashboardScreen {
            greeting: &app.greeting.greeting,
            state: &mut tui.dashboard,
        }
        .render(frame, area),
        ScreenId::Report => ReportScreen {
            status_message: &app.status_message,
            menu: &tui.report_menu,
        }
        .render(frame, area),
    }
}
