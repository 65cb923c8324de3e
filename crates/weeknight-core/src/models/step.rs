//! Step and timeline models.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeeknightError};

/// One cooking instruction as returned by the timeline endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Backend identifier of the step
    pub id: String,

    /// Ordering key assigned by the backend (not necessarily 0-based)
    pub step_order: u32,

    /// Instruction text shown to the cook
    pub instruction: String,

    /// Localized instruction, when the recipe carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_zh: Option<String>,

    /// Estimated wall time for the step in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,

    /// Countdown seed for the timer when this step is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_sec: Option<u32>,

    /// Cooking method tag (e.g. "saute", "bake")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Equipment needed for the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,

    /// Steps sharing a group can run at the same time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrent_group: Option<String>,

    /// Cleanup suggestion to do while waiting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_hint: Option<String>,

    /// Target temperature in Fahrenheit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<f64>,

    /// How to tell the step is done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doneness_cue: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icon_keys: Vec<String>,
}

impl Step {
    /// Seed for the countdown timer; steps without a timer seed to zero.
    pub fn timer_seed(&self) -> u32 {
        self.timer_sec.unwrap_or(0)
    }

    /// Whether the timer controls should be offered for this step.
    pub fn has_timer(&self) -> bool {
        self.timer_seed() > 0
    }
}

/// The ordered, immutable list of steps for one recipe.
///
/// Positions are contiguous and 0-indexed: `steps()[i]` is the step at
/// position `i`, regardless of the `step_order` values the backend sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    recipe_id: String,
    steps: Vec<Step>,
}

impl Timeline {
    /// Builds a timeline from the backend's step list, ordering by
    /// `step_order`.
    ///
    /// # Errors
    ///
    /// Returns `WeeknightError::EmptyTimeline` if there are no steps and
    /// `WeeknightError::InvalidInput` if two steps share a `step_order`.
    pub fn new(recipe_id: impl Into<String>, mut steps: Vec<Step>) -> Result<Self> {
        let recipe_id = recipe_id.into();
        if steps.is_empty() {
            return Err(WeeknightError::EmptyTimeline { recipe_id });
        }

        steps.sort_by_key(|s| s.step_order);
        if let Some(dup) = steps.windows(2).find(|w| w[0].step_order == w[1].step_order) {
            return Err(WeeknightError::invalid_input("step_order")
                .with_reason(format!("duplicate step_order {}", dup[0].step_order)));
        }

        Ok(Self { recipe_id, steps })
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps; always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a timeline cannot be built without steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    /// Sum of all step timers in seconds.
    pub fn total_timer_seconds(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.timer_seed())).sum()
    }
}
