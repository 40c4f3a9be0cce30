/// Timer registry: the fixed six-task board and its per-second state machine.
use crate::types::{Task, TaskId};

/// Countdown each task starts with: 20 minutes in seconds.
pub const INITIAL_TIME: u32 = 20 * 60;

/// The fixed task set. Titles/subtitles/colors are display-only.
pub fn default_tasks() -> Vec<Task> {
    let task = |id, title, subtitle, color| Task {
        id,
        title,
        subtitle,
        time_remaining: INITIAL_TIME,
        is_active: false,
        color,
    };
    vec![
        task("tiktok", "TikTok Videos", "Short-form video", "#00f2ea"),
        task("reels", "Instagram Reels", "Short-form video", "#c13584"),
        task("facebook", "Facebook Posts", "Daily posts", "#1877f2"),
        task("zalo", "Zalo Messages", "Community replies", "#0068ff"),
        task("rpm", "RPM App Work", "Feature work", "#f97316"),
        task("livestream", "Livestream Notes", "Transcription", "#ef4444"),
    ]
}

/// Holds the task list and applies all timer mutations.
///
/// All changes go through `toggle`, `tick`, and `stop_all`; callers only ever
/// read snapshots via `tasks`.
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: default_tasks(),
        }
    }

    #[cfg(test)]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active).count()
    }

    /// Flip a task's timer on/off. No-op for unknown ids.
    pub fn toggle(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.is_active = !task.is_active;
        }
    }

    /// Advance the shared clock by one second.
    ///
    /// Each task is evaluated once, independently. An active task with time
    /// left loses one second; an active task already at zero is forced off.
    /// The decrement that lands on exactly zero leaves the task active for
    /// that tick, and the following tick performs the auto-stop. That
    /// one-tick lag is the observed behavior and is kept as-is.
    pub fn tick(&mut self) {
        for task in &mut self.tasks {
            if task.is_active && task.time_remaining > 0 {
                task.time_remaining -= 1;
            } else if task.is_active && task.time_remaining == 0 {
                task.is_active = false;
            }
        }
    }

    /// Force every timer off. Used by the complete action to freeze the
    /// minutes that feed the projection.
    pub fn stop_all(&mut self) {
        for task in &mut self.tasks {
            task.is_active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskState;

    fn single(time_remaining: u32, is_active: bool) -> TaskBoard {
        TaskBoard::with_tasks(vec![Task {
            id: "solo",
            title: "Solo",
            subtitle: "",
            time_remaining,
            is_active,
            color: "#ffffff",
        }])
    }

    #[test]
    fn default_board_has_six_idle_tasks_at_full_time() {
        let board = TaskBoard::new();
        assert_eq!(board.tasks().len(), 6);
        for task in board.tasks() {
            assert_eq!(task.time_remaining, INITIAL_TIME);
            assert!(!task.is_active);
            assert_eq!(task.state(), TaskState::Idle);
        }
    }

    #[test]
    fn toggle_flips_active_and_back() {
        let mut board = TaskBoard::new();
        board.toggle("tiktok");
        assert!(board.tasks()[0].is_active);
        board.toggle("tiktok");
        assert!(!board.tasks()[0].is_active);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut board = TaskBoard::new();
        board.toggle("nope");
        assert!(board.tasks().iter().all(|task| !task.is_active));
    }

    #[test]
    fn tick_decrements_only_active_tasks() {
        let mut board = TaskBoard::new();
        board.toggle("reels");
        board.tick();
        for task in board.tasks() {
            let expected = if task.id == "reels" {
                INITIAL_TIME - 1
            } else {
                INITIAL_TIME
            };
            assert_eq!(task.time_remaining, expected);
        }
    }

    #[test]
    fn auto_stop_lags_one_tick_behind_zero() {
        let mut board = single(1, true);
        board.tick();
        assert_eq!(board.tasks()[0].time_remaining, 0);
        assert!(board.tasks()[0].is_active, "still active on the zero tick");
        board.tick();
        assert_eq!(board.tasks()[0].time_remaining, 0);
        assert!(!board.tasks()[0].is_active);
        assert_eq!(board.tasks()[0].state(), TaskState::Expired);
    }

    #[test]
    fn expired_task_can_be_toggled_but_stops_again() {
        let mut board = single(0, false);
        board.toggle("solo");
        assert!(board.tasks()[0].is_active);
        // Nothing left to decrement; the next tick forces it back off.
        board.tick();
        assert_eq!(board.tasks()[0].time_remaining, 0);
        assert!(!board.tasks()[0].is_active);
    }

    #[test]
    fn inactive_tasks_are_untouched_by_ticks() {
        let mut board = single(42, false);
        for _ in 0..10 {
            board.tick();
        }
        assert_eq!(board.tasks()[0].time_remaining, 42);
        assert!(!board.tasks()[0].is_active);
    }

    #[test]
    fn time_never_goes_below_zero() {
        let mut board = single(2, true);
        for _ in 0..10 {
            board.tick();
        }
        assert_eq!(board.tasks()[0].time_remaining, 0);
        assert!(!board.tasks()[0].is_active);
    }

    #[test]
    fn stop_all_forces_every_task_off() {
        let mut board = TaskBoard::new();
        board.toggle("tiktok");
        board.toggle("zalo");
        assert_eq!(board.active_count(), 2);
        board.stop_all();
        assert_eq!(board.active_count(), 0);
    }
}
