//! Feature-flag resolution for a cooking session.
//!
//! Flags are fetched once when a session starts and then threaded through
//! explicitly as a [`FeedbackConfig`]; nothing reads them from global state.

use log::{debug, warn};

use crate::{
    api::Backend,
    models::{FeatureFlags, EMOJI_FEEDBACK},
};

/// Fetches flags, falling back to the built-in defaults on any failure.
pub async fn resolve_flags(
    backend: &dyn Backend,
    keys: Option<&[String]>,
    token: Option<&str>,
) -> FeatureFlags {
    match backend.get_feature_flags(keys, token).await {
        Ok(flags) => {
            debug!("Resolved feature flags from {:?}", flags.source());
            flags
        }
        Err(e) => {
            warn!("Failed to fetch feature flags, using defaults: {e}");
            FeatureFlags::defaults()
        }
    }
}

/// Flag-derived decisions for the post-cook feedback flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackConfig {
    /// Show the rating dialog before the leftover dialog
    pub emoji_feedback: bool,
}

impl FeedbackConfig {
    pub fn from_flags(flags: &FeatureFlags) -> Self {
        Self {
            emoji_feedback: flags.is_enabled(EMOJI_FEEDBACK),
        }
    }

    /// Fetches just the flags the feedback flow needs.
    pub async fn resolve(backend: &dyn Backend, token: Option<&str>) -> Self {
        let keys = [EMOJI_FEEDBACK.to_string()];
        Self::from_flags(&resolve_flags(backend, Some(&keys), token).await)
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self::from_flags(&FeatureFlags::defaults())
    }
}
