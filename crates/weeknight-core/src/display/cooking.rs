//! Views of a running cooking session.

use std::fmt;

use super::datetime::Countdown;
use crate::cook::{CookingSession, Ticker, Timer};

/// The active step with its position and timer.
pub struct StepView<'a, T: Ticker>(pub &'a CookingSession<T>);

impl<'a, T: Ticker> fmt::Display for StepView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(
            f,
            "## Step {} of {} ({:.0}%)",
            session.current_index() + 1,
            session.step_count(),
            session.progress()
        )?;
        writeln!(f)?;
        write!(f, "{}", session.current_step())?;

        if session.current_step().has_timer() {
            writeln!(f)?;
            writeln!(f, "{}", TimerView(session.timer()))?;
        }
        Ok(())
    }
}

/// One-line timer status, e.g. `⏱ 0:42 (running)`.
pub struct TimerView<'a, T: Ticker>(pub &'a Timer<T>);

impl<'a, T: Ticker> fmt::Display for TimerView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timer = self.0;
        let state = if timer.is_running() {
            "running"
        } else if timer.remaining() == 0 {
            "done"
        } else {
            "paused"
        };
        write!(f, "⏱ {} ({state})", Countdown(timer.remaining()))
    }
}
