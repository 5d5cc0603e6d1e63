// UI module
// Rendering and the main event loop

pub mod app_view;
pub mod terminal;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};

use crate::constants::EVENT_POLL_INTERVAL;
use crate::core::{App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use terminal::TerminalGuard;

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_app(f, app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            let app_event = EventHandler::handle(event::read()?);
            handle_event(app, app_event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::ActivateTab(index) => {
            app.activate_tab(index);
        }
        AppEvent::Mouse(mouse) => {
            if app.mouse_enabled {
                app.tab_bar.handle_mouse(&mouse);
            }
        }
        AppEvent::Redraw | AppEvent::None => {}
    }
}
