use crossterm::event::KeyCode;

use crate::projection;
use crate::timer::TaskBoard;
use crate::types::CalculationResult;

use super::{AppEvent, AppView, SettingsField};

/// The top-level application state.
///
/// Every mutation, whether from the clock tick or a key press, is dispatched
/// through `update`, so at most one change to the board is in flight at a
/// time.
pub struct App {
    pub running: bool,
    pub board: TaskBoard,
    pub view: AppView,
    pub years: u32,
    pub daily_rate_percent: f64,
    pub results: Option<CalculationResult>,
    pub results_open: bool,
    pub selected_task_index: usize,
    pub settings_popup: Option<SettingsPopup>,
    pub status: Option<String>,
}

/// Inline editor for the two projection settings.
#[derive(Clone, Debug)]
pub struct SettingsPopup {
    pub years: String,
    pub rate: String,
    pub field: SettingsField,
}

impl SettingsPopup {
    fn buffer_mut(&mut self) -> &mut String {
        match self.field {
            SettingsField::Years => &mut self.years,
            SettingsField::Rate => &mut self.rate,
        }
    }
}

impl App {
    pub fn new(years: u32, daily_rate_percent: f64) -> Self {
        Self {
            running: true,
            board: TaskBoard::new(),
            view: AppView::Dashboard,
            years: years.max(1),
            daily_rate_percent,
            results: None,
            results_open: false,
            selected_task_index: 0,
            settings_popup: None,
            status: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.board.tick(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.settings_popup.is_some() {
            self.handle_settings_key(key);
            return;
        }
        if self.results_open {
            self.handle_results_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                self.view = match self.view {
                    AppView::Help => AppView::Dashboard,
                    AppView::Dashboard => AppView::Help,
                };
            }
            KeyCode::Esc => {
                if self.view == AppView::Help {
                    self.view = AppView::Dashboard;
                } else {
                    self.clear_status();
                }
            }
            KeyCode::Char(ch @ '1'..='6') => {
                let index = ch as usize - '1' as usize;
                self.toggle_task_at(index);
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.view == AppView::Dashboard {
                    self.toggle_task_at(self.selected_task_index);
                }
            }
            KeyCode::Char('s') => self.open_settings_popup(),
            KeyCode::Char('c') => self.complete(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.results_open = false;
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyCode) {
        let Some(popup) = self.settings_popup.as_mut() else {
            return;
        };
        match key {
            KeyCode::Esc => {
                self.settings_popup = None;
                self.clear_status();
            }
            KeyCode::Enter => self.apply_settings_popup(),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                popup.field = match popup.field {
                    SettingsField::Years => SettingsField::Rate,
                    SettingsField::Rate => SettingsField::Years,
                };
            }
            KeyCode::Backspace | KeyCode::Delete => {
                popup.buffer_mut().pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_ascii_digit() || ((ch == '.' || ch == '-') && popup.field == SettingsField::Rate) {
                    popup.buffer_mut().push(ch);
                }
            }
            _ => {}
        }
    }

    fn toggle_task_at(&mut self, index: usize) {
        let Some(task) = self.board.tasks().get(index) else {
            return;
        };
        let id = task.id;
        self.board.toggle(id);
        self.selected_task_index = index;
        self.clear_status();
    }

    fn move_selection_up(&mut self) {
        let len = self.board.tasks().len();
        if len == 0 {
            return;
        }
        if self.selected_task_index == 0 {
            self.selected_task_index = len - 1;
        } else {
            self.selected_task_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        let len = self.board.tasks().len();
        if len == 0 {
            return;
        }
        self.selected_task_index = (self.selected_task_index + 1) % len;
    }

    fn open_settings_popup(&mut self) {
        self.settings_popup = Some(SettingsPopup {
            years: self.years.to_string(),
            rate: self.daily_rate_percent.to_string(),
            field: SettingsField::Years,
        });
    }

    /// Parse and clamp the popup fields: years is an integer floored at 1,
    /// rate falls back to 0 on an invalid parse. The calculator itself
    /// accepts anything numeric; coercion happens here at the boundary.
    fn apply_settings_popup(&mut self) {
        let Some(popup) = self.settings_popup.take() else {
            return;
        };
        self.years = popup.years.trim().parse::<u32>().unwrap_or(1).max(1);
        self.daily_rate_percent = popup.rate.trim().parse::<f64>().unwrap_or(0.0);
        self.status = Some(format!(
            "Projection set to {} years at {}%/day.",
            self.years, self.daily_rate_percent
        ));
    }

    /// The complete action: freeze all timers, then project from the frozen
    /// snapshot and open the results modal.
    pub fn complete(&mut self) {
        self.board.stop_all();
        let result = projection::project(self.board.tasks(), self.years, self.daily_rate_percent);
        self.results = Some(result);
        self.results_open = true;
        self.clear_status();
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{DEFAULT_DAILY_RATE_PERCENT, DEFAULT_YEARS};
    use crate::timer::INITIAL_TIME;

    fn default_app() -> App {
        App::new(DEFAULT_YEARS, DEFAULT_DAILY_RATE_PERCENT)
    }

    fn key(app: &mut App, code: KeyCode) {
        app.update(AppEvent::KeyPress(code));
    }

    #[test]
    fn number_keys_toggle_the_matching_task() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('3'));
        assert!(app.board.tasks()[2].is_active);
        key(&mut app, KeyCode::Char('3'));
        assert!(!app.board.tasks()[2].is_active);
    }

    #[test]
    fn tick_events_advance_active_timers() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('1'));
        app.update(AppEvent::Tick);
        app.update(AppEvent::Tick);
        assert_eq!(app.board.tasks()[0].time_remaining, INITIAL_TIME - 2);
        assert_eq!(app.board.tasks()[1].time_remaining, INITIAL_TIME);
    }

    #[test]
    fn complete_freezes_timers_and_opens_results() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('1'));
        key(&mut app, KeyCode::Char('2'));
        key(&mut app, KeyCode::Char('c'));
        assert_eq!(app.board.active_count(), 0);
        assert!(app.results_open);
        let result = app.results.as_ref().unwrap();
        assert_eq!(result.projections.len(), 6);
        assert!(result.is_loss);
    }

    #[test]
    fn complete_replaces_the_previous_result() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('c'));
        let first = app.results.clone().unwrap();
        key(&mut app, KeyCode::Esc);

        key(&mut app, KeyCode::Char('1'));
        app.update(AppEvent::Tick);
        key(&mut app, KeyCode::Char('c'));
        let second = app.results.clone().unwrap();
        assert!(second.total_minutes > first.total_minutes);
    }

    #[test]
    fn settings_popup_clamps_years_and_rate() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('s'));
        {
            let popup = app.settings_popup.as_mut().unwrap();
            popup.years.clear();
            popup.rate = "bogus".to_string();
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.years, 1);
        assert_eq!(app.daily_rate_percent, 0.0);
        assert!(app.settings_popup.is_none());
    }

    #[test]
    fn settings_popup_accepts_typed_values() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('s'));
        // Default buffers hold the current values; clear before typing.
        app.settings_popup.as_mut().unwrap().years.clear();
        app.settings_popup.as_mut().unwrap().rate.clear();
        key(&mut app, KeyCode::Char('2'));
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Char('1'));
        key(&mut app, KeyCode::Char('.'));
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.years, 25);
        assert_eq!(app.daily_rate_percent, 1.5);
    }

    #[test]
    fn settings_popup_ignores_letters_in_numeric_fields() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('s'));
        key(&mut app, KeyCode::Char('x'));
        assert_eq!(app.settings_popup.as_ref().unwrap().years, "11");
    }

    #[test]
    fn results_modal_swallows_keys_until_dismissed() {
        let mut app = default_app();
        key(&mut app, KeyCode::Char('c'));
        assert!(app.results_open);
        // Toggles are inert while the modal is up.
        key(&mut app, KeyCode::Char('1'));
        assert_eq!(app.board.active_count(), 0);
        key(&mut app, KeyCode::Esc);
        assert!(!app.results_open);
        key(&mut app, KeyCode::Char('1'));
        assert_eq!(app.board.active_count(), 1);
    }

    #[test]
    fn selection_wraps_and_space_toggles() {
        let mut app = default_app();
        key(&mut app, KeyCode::Up);
        assert_eq!(app.selected_task_index, 5);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.selected_task_index, 0);
        key(&mut app, KeyCode::Char(' '));
        assert!(app.board.tasks()[0].is_active);
    }
}
