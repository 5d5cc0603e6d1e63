// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Activate the tab at this position (digit shortcuts, 0-based)
    ActivateTab(usize),

    /// Pointer input, hit-tested against the tab row
    Mouse(MouseEvent),

    /// Terminal resized; the next draw lays out again
    Redraw,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => AppEvent::Mouse(mouse),
            Event::Resize(_, _) => AppEvent::Redraw,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // 1-9 select the first nine tabs
            KeyCode::Char(digit @ '1'..='9') => AppEvent::ActivateTab(digit as usize - '1' as usize),

            _ => AppEvent::None,
        }
    }
}
