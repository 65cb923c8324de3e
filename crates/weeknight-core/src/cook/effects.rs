//! Fire-and-forget execution of cooking-flow effects.

use std::sync::Arc;

use log::{debug, warn};
use tokio::task::JoinHandle;

use super::sequencer::Effect;
use crate::{
    api::Backend,
    params::CreateLeftover,
    session::{token_of, Identity},
    telemetry::TelemetryEmitter,
};

/// Runs [`Effect`]s for one recipe as detached tasks.
///
/// Failures are logged and dropped; nothing is reported back to the state
/// machine that produced the effects.
#[derive(Clone)]
pub struct EffectDispatcher {
    backend: Arc<dyn Backend>,
    telemetry: TelemetryEmitter,
    identity: Option<Identity>,
    recipe_id: String,
    recipe_title: Option<String>,
}

impl EffectDispatcher {
    pub fn new(
        backend: Arc<dyn Backend>,
        identity: Option<Identity>,
        recipe_id: impl Into<String>,
        recipe_title: Option<String>,
    ) -> Self {
        Self {
            telemetry: TelemetryEmitter::new(Arc::clone(&backend), identity.clone()),
            backend,
            identity,
            recipe_id: recipe_id.into(),
            recipe_title,
        }
    }

    /// Spawns one task per effect. The handles are only useful to callers
    /// that want to wait (tests, shutdown); dropping them is fine.
    pub fn dispatch(&self, effects: Vec<Effect>) -> Vec<JoinHandle<()>> {
        effects
            .into_iter()
            .filter_map(|effect| self.dispatch_one(effect))
            .collect()
    }

    fn dispatch_one(&self, effect: Effect) -> Option<JoinHandle<()>> {
        match effect {
            Effect::Report { event, context } => {
                self.telemetry.emit(event, Some(&self.recipe_id), context)
            }
            Effect::CreateLeftover { servings } => Some(self.spawn_create_leftover(servings)),
        }
    }

    fn spawn_create_leftover(&self, servings: u32) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let input = CreateLeftover {
            recipe_id: self.recipe_id.clone(),
            recipe_title: self.recipe_title.clone(),
            servings,
            user_id: self.identity.as_ref().map(|i| i.user_id.clone()),
            ..Default::default()
        };
        let token = token_of(self.identity.as_ref()).map(str::to_string);

        tokio::spawn(async move {
            match backend.create_leftover(&input, token.as_deref()).await {
                Ok(leftover) => debug!("Recorded leftover {}", leftover.id),
                Err(e) => warn!("Failed to record leftovers for {}: {e}", input.recipe_id),
            }
        })
    }
}
