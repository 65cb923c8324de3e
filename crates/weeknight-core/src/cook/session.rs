//! The client-local cooking session.

use log::debug;

use super::{
    loader::LoadedRecipe,
    navigator::StepNavigator,
    sequencer::{Effect, Sequencer},
    timer::{IntervalTicker, Ticker, Timer},
};
use crate::{
    error::{Result, WeeknightError},
    flags::FeedbackConfig,
    models::{Recipe, Step, TelemetryEvent, Timeline},
};

/// In-memory state of one cooking run: which step is active and its timer.
///
/// Nothing here is persisted; dropping the session (and with it the timer's
/// ticker) ends it.
pub struct CookingSession<T: Ticker = IntervalTicker> {
    recipe: Recipe,
    timeline: Timeline,
    navigator: StepNavigator,
    timer: Timer<T>,
    started: bool,
    completed: bool,
}

impl<T: Ticker> CookingSession<T> {
    /// Prepares a session on the first step, timer seeded and stopped.
    pub fn new(loaded: LoadedRecipe, ticker: T) -> Self {
        let LoadedRecipe { recipe, timeline } = loaded;
        let seed = timeline.get(0).map(Step::timer_seed).unwrap_or(0);
        Self {
            navigator: StepNavigator::new(timeline.len()),
            timer: Timer::new(seed, ticker),
            recipe,
            timeline,
            started: false,
            completed: false,
        }
    }

    /// Sets the callback run whenever a step's countdown finishes.
    pub fn on_timer_complete<F>(self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            timer: self.timer.on_complete(callback),
            ..self
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn recipe_id(&self) -> &str {
        self.timeline.recipe_id()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Leaves the preview. Reports `cook_start` the first time only.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        debug!("Cooking started for {}", self.recipe_id());
        vec![Effect::Report {
            event: TelemetryEvent::CookStart,
            context: None,
        }]
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn step_count(&self) -> usize {
        self.navigator.count()
    }

    pub fn current_step(&self) -> &Step {
        // The navigator index is always within the timeline.
        &self.timeline.steps()[self.navigator.current()]
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn progress(&self) -> f64 {
        self.navigator.progress()
    }

    pub fn timer(&self) -> &Timer<T> {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Timer<T> {
        &mut self.timer
    }

    /// Advances one step. Returns whether the step changed; at the last step
    /// this is a no-op and the timer is left untouched.
    pub fn next(&mut self) -> bool {
        let moved = self.navigator.next();
        if moved {
            self.enter_current_step();
        }
        moved
    }

    /// Goes back one step. Returns whether the step changed.
    pub fn prev(&mut self) -> bool {
        let moved = self.navigator.prev();
        if moved {
            self.enter_current_step();
        }
        moved
    }

    /// A running timer never carries over to another step.
    fn enter_current_step(&mut self) {
        self.timer.pause();
        let seed = self.current_step().timer_seed();
        self.timer.reseed(seed);
        debug!(
            "Moved to step {}/{} (timer {}s)",
            self.navigator.current() + 1,
            self.navigator.count(),
            seed
        );
    }

    /// Finishes cooking from the last step and enters the feedback flow.
    ///
    /// # Errors
    ///
    /// Returns `WeeknightError::InvalidTransition` before `start`, away from
    /// the last step, or when already completed.
    pub fn complete(&mut self, config: FeedbackConfig) -> Result<(Sequencer, Vec<Effect>)> {
        if !self.started {
            return Err(WeeknightError::invalid_transition("preview", "complete"));
        }
        if self.completed {
            return Err(WeeknightError::invalid_transition("completed", "complete"));
        }
        if !self.navigator.is_last() {
            return Err(WeeknightError::invalid_transition(
                format!("step {} of {}", self.navigator.current() + 1, self.navigator.count()),
                "complete",
            ));
        }

        self.timer.pause();
        self.completed = true;
        debug!("Cooking completed for {}", self.recipe_id());
        Ok(Sequencer::begin(config))
    }
}
