use crate::core::catalog::{self, ColorToken};
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MainMenu, StationScreen, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Map an abstract catalog color token to a terminal color. The only place
/// tokens become concrete.
pub fn accent_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Sky => Color::Cyan,
        ColorToken::Amber => Color::Yellow,
        ColorToken::Emerald => Color::Green,
        ColorToken::Violet => Color::Magenta,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar
    let location = match app.screen {
        Screen::Menu => "Menu".to_string(),
        Screen::Station(id) => catalog::station(id).title.to_string(),
    };
    TitleBar::new(location, app.status_message.clone()).render(frame, title_area);

    // Main area - exactly one view is active
    match app.screen {
        Screen::Menu => {
            MainMenu::new(&mut tui.menu, tui.pulse_value).render(frame, main_area);
        }
        Screen::Station(_) => {
            if let Some(ref mut station) = tui.station {
                StationScreen::new(station).render(frame, main_area);
            }
        }
    }

    // Context-sensitive key help
    let help = match app.screen {
        Screen::Menu => " ↑↓ Select   Enter Open   1-4 Jump   q Quit",
        Screen::Station(_) => {
            " Tab Next module   Shift+Tab Previous   ↑↓ Field   ←→ Adjust   Esc Menu"
        }
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
