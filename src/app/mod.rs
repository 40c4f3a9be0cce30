mod state;

use crossterm::event::KeyCode;

pub use state::{App, SettingsPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    /// One second of the shared clock has elapsed.
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    Help,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Years,
    Rate,
}
