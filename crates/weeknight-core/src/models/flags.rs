//! Remote feature flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flag gating the post-cook rating dialog.
pub const EMOJI_FEEDBACK: &str = "emoji_feedback";

/// Values used when the flag endpoint is unreachable or silent on a key.
pub const DEFAULT_FLAGS: &[(&str, bool)] = &[
    ("cold_start_flow", true),
    (EMOJI_FEEDBACK, true),
    ("autoplan", false),
    ("budget_learning", false),
    ("multi_channel_list", false),
    ("nutrition_weekly", false),
    ("ocr_import", true),
    ("multi_dish_scheduler", false),
    ("appliance_link", false),
    ("web_voice_experiment", false),
];

/// Where a set of flags came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlagSource {
    Database,
    #[default]
    Defaults,
}

/// Mapping of flag name to enabled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    flags: BTreeMap<String, bool>,
    #[serde(default)]
    source: FlagSource,
}

impl FeatureFlags {
    /// The built-in defaults.
    pub fn defaults() -> Self {
        Self {
            flags: DEFAULT_FLAGS
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v))
                .collect(),
            source: FlagSource::Defaults,
        }
    }

    /// Defaults overlaid with the given remote values.
    pub fn with_overrides<I>(overrides: I, source: FlagSource) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let mut flags = Self::defaults();
        flags.flags.extend(overrides);
        flags.source = source;
        flags
    }

    /// Unknown flags read as disabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn source(&self) -> FlagSource {
        self.source
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::defaults()
    }
}
