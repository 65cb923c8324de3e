//! Fire-and-forget telemetry.
//!
//! Each event is reported on its own spawned task. The returned
//! [`JoinHandle`] may be dropped; the task still runs to completion and any
//! failure is logged and discarded. Telemetry never surfaces an error to the
//! caller and never blocks a state transition.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::{
    api::Backend,
    models::TelemetryEvent,
    params::TelemetryReport,
    session::{token_of, Identity},
};

/// Reports events on behalf of the current user, if any.
#[derive(Clone)]
pub struct TelemetryEmitter {
    backend: Arc<dyn Backend>,
    identity: Option<Identity>,
}

impl TelemetryEmitter {
    pub fn new(backend: Arc<dyn Backend>, identity: Option<Identity>) -> Self {
        Self { backend, identity }
    }

    /// Whether `event` will actually be sent from this session.
    ///
    /// Anonymous sessions only send events that do not
    /// [require an identity](TelemetryEvent::requires_identity).
    pub fn will_send(&self, event: TelemetryEvent) -> bool {
        self.identity.is_some() || !event.requires_identity()
    }

    /// Reports `event` in the background.
    ///
    /// Anonymous reports carry no `user_id` and no bearer token. Returns
    /// `None` without spawning when the event is skipped.
    /// Must be called from within a tokio runtime.
    pub fn emit(
        &self,
        event: TelemetryEvent,
        recipe_id: Option<&str>,
        context: Option<Value>,
    ) -> Option<JoinHandle<()>> {
        if !self.will_send(event) {
            debug!("Skipping {event} for anonymous session");
            return None;
        }
        let report = TelemetryReport {
            event,
            recipe_id: recipe_id.map(str::to_string),
            user_id: self.identity.as_ref().map(|i| i.user_id.clone()),
            context,
        };
        let token = token_of(self.identity.as_ref()).map(str::to_string);
        let backend = Arc::clone(&self.backend);

        Some(tokio::spawn(async move {
            match backend.report_event(&report, token.as_deref()).await {
                Ok(()) => debug!("Reported {}", report.event),
                Err(e) => warn!("Dropping {} telemetry: {e}", report.event),
            }
        }))
    }
}
