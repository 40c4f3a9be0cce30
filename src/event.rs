use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps key presses to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
    }
    Ok(None)
}

/// Runs the main event loop.
///
/// Key presses are handled as they arrive; the shared clock tick fires once
/// per second regardless of input, driving every active countdown. The tick
/// source lives and dies with this loop, so tearing down the loop tears down
/// the clock.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(event) = poll(timeout)? {
            app.update(event);
        }
        if last_tick.elapsed() >= tick_rate {
            app.update(AppEvent::Tick);
            last_tick = Instant::now();
        }
    }
    Ok(())
}
