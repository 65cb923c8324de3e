//! Client-side cooking flow.
//!
//! The flow runs entirely in memory on a single task:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────┐   ┌──────────────┐
//! │   loader     │──▶│ CookingSession               │──▶│  Sequencer   │
//! │ (recipe +    │   │  StepNavigator ⇄ Timer       │   │ (rating,     │
//! │  timeline)   │   │                              │   │  leftovers)  │
//! └──────────────┘   └──────────────────────────────┘   └──────────────┘
//!                              │   effects                   │ effects
//!                              ▼                             ▼
//!                       ┌─────────────────────────────────────────┐
//!                       │ EffectDispatcher (fire-and-forget)      │
//!                       └─────────────────────────────────────────┘
//! ```
//!
//! - [`loader`]: concurrent fetch of recipe metadata and steps
//! - [`navigator`]: bounded step index
//! - [`timer`]: countdown with an injectable [`Ticker`]
//! - [`session`]: composes navigator and timer; resets the timer on step change
//! - [`sequencer`]: post-completion dialog state machine
//! - [`effects`]: runs telemetry and leftover requests in the background
//!
//! # Example
//!
//! ```rust
//! use weeknight_core::{
//!     cook::{CookingSession, LoadedRecipe, ManualTicker, Stage},
//!     flags::FeedbackConfig,
//!     models::{LeftoverChoice, Recipe, Step, Timeline},
//! };
//!
//! # async fn example() -> weeknight_core::Result<()> {
//! # let step = |order: u32, timer: Option<u32>| Step {
//! #     id: format!("s{order}"), step_order: order, instruction: String::new(),
//! #     instruction_zh: None, duration_sec: None, timer_sec: timer, method: None,
//! #     equipment: None, concurrent_group: None, cleanup_hint: None,
//! #     temperature_f: None, doneness_cue: None, icon_keys: vec![],
//! # };
//! let loaded = LoadedRecipe {
//!     recipe: Recipe {
//!         recipe_id: None,
//!         title: "Omelette".to_string(),
//!         hero_image_url: None,
//!         servings: None,
//!         time_total_min: None,
//!     },
//!     timeline: Timeline::new("r-1", vec![step(0, None), step(1, Some(2))])?,
//! };
//!
//! let mut session = CookingSession::new(loaded, ManualTicker::default());
//! session.start();
//! session.next();
//! session.timer_mut().start();
//! while session.timer().is_running() {
//!     session.timer_mut().next_tick().await;
//! }
//!
//! let (mut feedback, _) = session.complete(FeedbackConfig { emoji_feedback: false })?;
//! assert_eq!(feedback.stage(), Stage::Leftover);
//! feedback.submit_leftover(LeftoverChoice::None)?;
//! assert_eq!(feedback.stage(), Stage::Done);
//! # Ok(())
//! # }
//! ```

pub mod effects;
pub mod loader;
pub mod navigator;
pub mod sequencer;
pub mod session;
pub mod timer;


pub use effects::EffectDispatcher;
pub use loader::{load_recipe, LoadedRecipe};
pub use navigator::StepNavigator;
pub use sequencer::{Effect, Sequencer, Stage};
pub use session::CookingSession;
pub use timer::{
    play_cue, Cue, IntervalTicker, ManualTicker, TerminalBell, Tick, Ticker, Timer, TICK_PERIOD,
};
