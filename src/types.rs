pub type TaskId = &'static str;

/// A single content task with its countdown timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Seconds left on the countdown, in [0, INITIAL_TIME].
    pub time_remaining: u32,
    /// Whether the shared clock tick decrements this task.
    pub is_active: bool,
    /// Display-only hex color.
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Running,
    Expired,
}

impl Task {
    pub fn state(&self) -> TaskState {
        if self.is_active {
            TaskState::Running
        } else if self.time_remaining == 0 {
            TaskState::Expired
        } else {
            TaskState::Idle
        }
    }
}

/// Per-task projection, produced only at calculation time.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskProjection {
    pub title: &'static str,
    pub minutes: f64,
    pub daily_principal: f64,
    pub future_value: f64,
}

/// Name + minutes view of the projections, for the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub name: &'static str,
    pub minutes: f64,
}

/// Aggregate result of one `complete` action. Replaces any prior result.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub total_minutes: f64,
    /// Net daily principal across all tasks.
    pub daily_principal: f64,
    /// Net future value across all tasks.
    pub future_value: f64,
    pub is_loss: bool,
    pub projections: Vec<TaskProjection>,
    pub chart_data: Vec<ChartPoint>,
}
