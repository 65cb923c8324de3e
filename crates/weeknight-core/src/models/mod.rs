//! Data models for recipes, timelines, leftovers and feedback.
//!
//! These types mirror the JSON documents exchanged with the backend. Display
//! implementations live in [`crate::display::models`] so the data structures
//! stay free of presentation concerns.
//!
//! # Examples
//!
//! ```rust
//! use weeknight_core::models::{Step, Timeline};
//!
//! let step = |order: u32, timer: Option<u32>| Step {
//!     id: format!("s{order}"),
//!     step_order: order,
//!     instruction: format!("Step {order}"),
//!     timer_sec: timer,
//! #   instruction_zh: None,
//! #   duration_sec: None,
//! #   method: None,
//! #   equipment: None,
//! #   concurrent_group: None,
//! #   cleanup_hint: None,
//! #   temperature_f: None,
//! #   doneness_cue: None,
//! #   icon_keys: vec![],
//! };
//!
//! // Steps arrive in any order and are sorted by `step_order`.
//! let timeline = Timeline::new("r-1", vec![step(2, None), step(1, Some(30))]).unwrap();
//! assert_eq!(timeline.get(0).unwrap().timer_seed(), 30);
//! ```

pub mod feedback;
pub mod flags;
pub mod grocery;
pub mod leftover;
pub mod recipe;
pub mod step;
pub mod telemetry;


pub use feedback::{LeftoverChoice, Rating, ServingCount};
pub use flags::{FeatureFlags, FlagSource, EMOJI_FEEDBACK};
pub use grocery::{AisleGroup, GroceryItem, GroceryList};
pub use leftover::Leftover;
pub use recipe::{Recipe, RecipeCard, RecipePage, SideDish, SuggestionCard, TonightResponse};
pub use step::{Step, Timeline};
pub use telemetry::TelemetryEvent;
