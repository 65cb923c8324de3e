//! Telemetry event names.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of telemetry events accepted by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryEvent {
    CardView,
    CardClick,
    CardSelect,
    CookStart,
    CookComplete,
    LeftoverMark,
    Share,
    EmojiGood,
    EmojiNeutral,
    EmojiBad,
}

impl TelemetryEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TelemetryEvent::CardView => "card_view",
            TelemetryEvent::CardClick => "card_click",
            TelemetryEvent::CardSelect => "card_select",
            TelemetryEvent::CookStart => "cook_start",
            TelemetryEvent::CookComplete => "cook_complete",
            TelemetryEvent::LeftoverMark => "leftover_mark",
            TelemetryEvent::Share => "share",
            TelemetryEvent::EmojiGood => "emoji_good",
            TelemetryEvent::EmojiNeutral => "emoji_neutral",
            TelemetryEvent::EmojiBad => "emoji_bad",
        }
    }

    /// Whether the event is only reported for a signed-in user.
    ///
    /// Feedback answers (`emoji_*`, `leftover_mark`) and card views are sent
    /// anonymously too.
    pub fn requires_identity(&self) -> bool {
        matches!(
            self,
            TelemetryEvent::CookStart
                | TelemetryEvent::CookComplete
                | TelemetryEvent::CardSelect
                | TelemetryEvent::Share
        )
    }
}

impl FromStr for TelemetryEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card_view" => Ok(TelemetryEvent::CardView),
            "card_click" => Ok(TelemetryEvent::CardClick),
            "card_select" => Ok(TelemetryEvent::CardSelect),
            "cook_start" => Ok(TelemetryEvent::CookStart),
            "cook_complete" => Ok(TelemetryEvent::CookComplete),
            "leftover_mark" => Ok(TelemetryEvent::LeftoverMark),
            "share" => Ok(TelemetryEvent::Share),
            "emoji_good" => Ok(TelemetryEvent::EmojiGood),
            "emoji_neutral" => Ok(TelemetryEvent::EmojiNeutral),
            "emoji_bad" => Ok(TelemetryEvent::EmojiBad),
            _ => Err(format!("Invalid telemetry event: {s}")),
        }
    }
}

impl fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
