//! Core library for the Weeknight cooking assistant client.
//!
//! This crate holds the client-side logic for cooking a recipe step by step:
//! loading a recipe's timeline, navigating its steps, running per-step
//! countdown timers and driving the post-cook feedback flow. It also talks to
//! the Weeknight backend for suggestions, leftovers, grocery lists, feature
//! flags and telemetry.
//!
//! # Architecture
//!
//! - **Backend** ([`api`]): the [`api::Backend`] trait and its HTTP
//!   implementation, built with [`ClientBuilder`]
//! - **Cooking flow** ([`cook`]): in-memory session state and the feedback
//!   state machine, which returns effects instead of performing them
//! - **Identity** ([`session`]): the signed-in user, resolved once per run
//! - **Display** ([`display`]): markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use weeknight_core::{
//!     ClientBuilder,
//!     api::Backend,
//!     cook::{load_recipe, CookingSession, EffectDispatcher, IntervalTicker},
//!     flags::FeedbackConfig,
//! };
//!
//! # async fn example() -> weeknight_core::Result<()> {
//! let backend: Arc<dyn Backend> = Arc::new(ClientBuilder::new().build()?);
//!
//! let loaded = load_recipe(backend.as_ref(), "recipe-123", None).await?;
//! let dispatcher = EffectDispatcher::new(
//!     Arc::clone(&backend),
//!     None,
//!     "recipe-123",
//!     Some(loaded.recipe.title.clone()),
//! );
//!
//! let mut session = CookingSession::new(loaded, IntervalTicker::default());
//! dispatcher.dispatch(session.start());
//! while session.next() {}
//!
//! let config = FeedbackConfig::resolve(backend.as_ref(), None).await;
//! let (_feedback, effects) = session.complete(config)?;
//! dispatcher.dispatch(effects);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cook;
pub mod display;
pub mod error;
pub mod flags;
pub mod models;
pub mod params;
pub mod session;
pub mod telemetry;

// Re-export commonly used types
pub use api::{Backend, ClientBuilder, HttpBackend};
pub use cook::{CookingSession, EffectDispatcher, Sequencer, Stage, Timer};
pub use display::{Countdown, Leftovers, OperationStatus, StepView, Suggestions};
pub use error::{Result, WeeknightError};
pub use flags::FeedbackConfig;
pub use models::{
    FeatureFlags, GroceryList, Leftover, LeftoverChoice, Rating, Recipe, ServingCount, Step,
    TelemetryEvent, Timeline,
};
pub use session::{Identity, IdentityStore};
pub use telemetry::TelemetryEmitter;
