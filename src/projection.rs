/// Projection calculator: converts time worked per task into a daily
/// monetary principal and compounds it over the horizon.
use crate::timer::INITIAL_TIME;
use crate::types::{CalculationResult, ChartPoint, Task, TaskProjection};

/// Minutes in one full session, the denominator for scaling work.
pub const SESSION_MINUTES: f64 = 20.0;
/// Value of one full session, in currency units.
pub const SESSION_VALUE: f64 = 1_000_000.0;
/// A day comprises three sessions.
pub const SESSIONS_PER_DAY: f64 = 3.0;
/// Flat penalty for a task with no time logged: three full session-losses.
pub const IDLE_DAILY_LOSS: f64 = -(SESSION_VALUE * SESSIONS_PER_DAY);

pub const DAYS_PER_YEAR: u32 = 365;

pub const DEFAULT_YEARS: u32 = 11;
pub const DEFAULT_DAILY_RATE_PERCENT: f64 = 0.5;

/// Future value of an ordinary annuity: a constant contribution `principal`
/// recurring for `days` periods at per-period rate `rate`.
///
/// The zero-rate case takes the linear branch to avoid dividing by zero.
pub fn future_value(principal: f64, rate: f64, days: u32) -> f64 {
    if rate == 0.0 {
        principal * days as f64
    } else {
        principal * (((1.0 + rate).powi(days as i32) - 1.0) / rate)
    }
}

/// Signed currency-per-day value for a task given its minutes worked.
///
/// Any positive amount of work scales linearly through the gain branch; the
/// flat penalty applies only at exactly zero minutes.
pub fn daily_principal(minutes_worked: f64) -> f64 {
    if minutes_worked > 0.0 {
        (minutes_worked / SESSION_MINUTES) * SESSION_VALUE * SESSIONS_PER_DAY
    } else {
        IDLE_DAILY_LOSS
    }
}

/// Compute the full projection from a read-only snapshot of the task list.
///
/// Pure and total: defined for all rates, all `years`, and all timer states.
pub fn project(tasks: &[Task], years: u32, daily_rate_percent: f64) -> CalculationResult {
    let rate = daily_rate_percent / 100.0;
    let days = years * DAYS_PER_YEAR;

    let projections: Vec<TaskProjection> = tasks
        .iter()
        .map(|task| {
            let minutes = (INITIAL_TIME - task.time_remaining) as f64 / 60.0;
            let daily_principal = daily_principal(minutes);
            TaskProjection {
                title: task.title,
                minutes,
                daily_principal,
                future_value: future_value(daily_principal, rate, days),
            }
        })
        .collect();

    let total_minutes = projections.iter().map(|p| p.minutes).sum();
    let net_daily_principal = projections.iter().map(|p| p.daily_principal).sum();
    let net_future_value: f64 = projections.iter().map(|p| p.future_value).sum();
    let chart_data = projections
        .iter()
        .map(|p| ChartPoint {
            name: p.title,
            minutes: p.minutes,
        })
        .collect();

    CalculationResult {
        total_minutes,
        daily_principal: net_daily_principal,
        future_value: net_future_value,
        is_loss: net_future_value < 0.0,
        projections,
        chart_data,
    }
}
