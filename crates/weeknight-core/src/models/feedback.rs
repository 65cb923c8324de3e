//! Post-cook feedback choices.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TelemetryEvent;

/// How the cook rated the dish.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// 😋 Delicious
    Good,

    /// 😐 It was okay
    Neutral,

    /// 🙅 Not for me
    Bad,
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" | "g" | "😋" => Ok(Rating::Good),
            "neutral" | "ok" | "n" | "😐" => Ok(Rating::Neutral),
            "bad" | "b" | "🙅" => Ok(Rating::Bad),
            _ => Err(format!("Invalid rating: {s}")),
        }
    }
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Neutral => "neutral",
            Rating::Bad => "bad",
        }
    }

    /// The telemetry event a submitted rating is reported as.
    pub fn event(&self) -> TelemetryEvent {
        match self {
            Rating::Good => TelemetryEvent::EmojiGood,
            Rating::Neutral => TelemetryEvent::EmojiNeutral,
            Rating::Bad => TelemetryEvent::EmojiBad,
        }
    }

    /// Emoji and label shown in the rating prompt.
    pub fn with_emoji(&self) -> &'static str {
        match self {
            Rating::Good => "😋 Delicious!",
            Rating::Neutral => "😐 It was okay",
            Rating::Bad => "🙅 Not for me",
        }
    }
}

/// Servings for the "2+ left" option, bounded by the stepper range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct ServingCount(u32);

impl ServingCount {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 10;

    /// Creates a count, rejecting values outside `MIN..=MAX`.
    pub fn new(servings: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&servings)
            .then_some(Self(servings))
    }

    /// Creates a count, clamping into `MIN..=MAX`.
    pub fn clamped(servings: u32) -> Self {
        Self(servings.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Stepper "+": saturates at `MAX`.
    pub fn increment(self) -> Self {
        Self::clamped(self.0.saturating_add(1))
    }

    /// Stepper "−": saturates at `MIN`.
    pub fn decrement(self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for ServingCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for ServingCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "servings must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<ServingCount> for u32 {
    fn from(value: ServingCount) -> Self {
        value.0
    }
}

/// The three mutually exclusive answers to "Any leftovers?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftoverChoice {
    /// Everything was eaten
    None,

    /// Exactly one serving left
    One,

    /// Two or more servings left
    Several(ServingCount),
}

impl LeftoverChoice {
    /// Number of servings the choice stands for.
    pub fn servings(&self) -> u32 {
        match self {
            LeftoverChoice::None => 0,
            LeftoverChoice::One => 1,
            LeftoverChoice::Several(count) => count.get(),
        }
    }

    /// Index of the option the user picked (0, 1 or 2), as reported in
    /// telemetry.
    pub fn option_index(&self) -> u8 {
        match self {
            LeftoverChoice::None => 0,
            LeftoverChoice::One => 1,
            LeftoverChoice::Several(_) => 2,
        }
    }
}

impl FromStr for LeftoverChoice {
    type Err = String;

    /// Accepts `0`, `1`, `2+` (default count) or any count `2..=10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "0" | "none" => Ok(LeftoverChoice::None),
            "1" | "one" => Ok(LeftoverChoice::One),
            "2+" => Ok(LeftoverChoice::Several(ServingCount::default())),
            other => {
                let n: u32 = other
                    .parse()
                    .map_err(|_| format!("Invalid leftover choice: {other}"))?;
                ServingCount::try_from(n).map(LeftoverChoice::Several)
            }
        }
    }
}
