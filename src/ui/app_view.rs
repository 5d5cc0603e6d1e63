// Application View
// Title line on top, the tab bar below it

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::constants::SHORTCUT_HINT;
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Tab bar
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);
    app.tab_bar.render(f, chunks[1]);
    render_shortcut_hint(f, app, chunks[1]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(app.title.as_str()).centered())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(title, area);
}

/// The bottom safe-area rows belong to the host; put the key hint on the last one
fn render_shortcut_hint(f: &mut Frame, app: &App, area: Rect) {
    if app.tab_bar.safe_area().bottom == 0 || area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };
    let hint = Paragraph::new(Line::from(SHORTCUT_HINT).centered())
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const CONFIG: &str = r#"
application:
  title: Phone
tab_bars:
  main:
    hwnd: main_tab_bar
    safe_area:
      bottom: 1
    tabs:
      - icon: star.fill
        label: Favorites
        content: Favorite Contents
      - icon: clock.fill
        label: Recents
        content: Recent Calls
"#;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right()).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn screen_text(buf: &Buffer) -> String {
        (buf.area.y..buf.area.bottom())
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_app(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_title_content_and_hint() {
        let mut app = App::from_config(&parse_config(CONFIG).unwrap()).unwrap();
        let buf = draw(&mut app, 60, 16);

        assert!(row_text(&buf, 0).contains("Phone"));
        assert!(screen_text(&buf).contains("Favorite Contents"));
        assert!(!screen_text(&buf).contains("Recent Calls"));
        assert!(row_text(&buf, 15).contains(SHORTCUT_HINT));

        // Content sits between the title and the measured tab row
        let content = app.tab_bar.content_area().unwrap();
        assert_eq!(content.y, 1);
        assert_eq!(content.height, 15 - app.tab_bar.tab_row_bounds().height);
    }

    #[test]
    fn test_switching_tab_changes_screen() {
        let mut app = App::from_config(&parse_config(CONFIG).unwrap()).unwrap();
        app.activate_tab(1);
        let buf = draw(&mut app, 60, 16);

        assert!(screen_text(&buf).contains("Recent Calls"));
        assert!(!screen_text(&buf).contains("Favorite Contents"));
    }
}
