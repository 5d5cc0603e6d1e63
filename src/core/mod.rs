// Core infrastructure module
// Application state and the events that drive it

pub mod app;
pub mod events;

pub use app::App;
pub use events::{AppEvent, EventHandler};
