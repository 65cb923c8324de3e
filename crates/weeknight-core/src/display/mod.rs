//! Display formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here format collections and cooking state. Everything
//! produces markdown, which the CLI renders with or without styling.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Step, Leftover)│───▶│ (Suggestions,   │───▶│     Output      │
//! │                 │    │  StepView, ...) │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: suggestion, search, leftover and timeline lists
//! - [`cooking`]: active step and timer views
//! - [`datetime`]: timestamps and countdown clocks
//! - [`status`]: one-line outcome messages
//!
//! ```rust
//! use weeknight_core::display::{Countdown, OperationStatus};
//!
//! println!("{}", OperationStatus::success("Leftover marked as eaten"));
//! assert_eq!(format!("{}", Countdown(90)), "1:30");
//! ```

pub mod collections;
pub mod cooking;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Leftovers, SearchResults, Suggestions, TimelineView};
pub use cooking::{StepView, TimerView};
pub use datetime::{Countdown, LocalDateTime};
pub use status::OperationStatus;
