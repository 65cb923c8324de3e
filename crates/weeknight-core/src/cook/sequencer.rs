//! Post-completion feedback flow.
//!
//! Once the cook marks the last step done, up to two dialogs follow:
//!
//! ```text
//!  complete ──▶ Rating ──▶ Leftover ──▶ Done
//!      │          (only with            ▲
//!      │        emoji_feedback)         │
//!      └──────────▶ Leftover ───────────┘
//! ```
//!
//! The [`Sequencer`] only decides transitions. Every transition returns the
//! [`Effect`]s to perform (telemetry reports, leftover creation); the caller
//! hands them to an [`super::EffectDispatcher`], which runs them
//! fire-and-forget. Whether those calls succeed has no bearing on the stage.

use std::fmt;

use serde_json::{json, Value};

use crate::{
    error::{Result, WeeknightError},
    flags::FeedbackConfig,
    models::{LeftoverChoice, Rating, TelemetryEvent},
};

/// Dialog currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Rating,
    Leftover,
    /// Flow finished; the caller leaves the cooking view
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Rating => "rating",
            Stage::Leftover => "leftover",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a telemetry event
    Report {
        event: TelemetryEvent,
        context: Option<Value>,
    },

    /// Record leftovers with the backend
    CreateLeftover { servings: u32 },
}

/// Feedback state machine for one completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    stage: Stage,
    rating: Option<(Rating, bool)>,
    leftover_servings: Option<u32>,
}

impl Sequencer {
    /// Enters the flow right after completion.
    ///
    /// Always reports `cook_complete`; the first stage depends on
    /// `config.emoji_feedback`.
    pub fn begin(config: FeedbackConfig) -> (Self, Vec<Effect>) {
        let stage = if config.emoji_feedback {
            Stage::Rating
        } else {
            Stage::Leftover
        };
        let sequencer = Self {
            stage,
            rating: None,
            leftover_servings: None,
        };
        let effects = vec![Effect::Report {
            event: TelemetryEvent::CookComplete,
            context: None,
        }];
        (sequencer, effects)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// The submitted rating and "kids disliked" answer, if any.
    pub fn rating(&self) -> Option<(Rating, bool)> {
        self.rating
    }

    /// Servings reported in the leftover dialog, if it was submitted.
    pub fn leftover_servings(&self) -> Option<u32> {
        self.leftover_servings
    }

    /// Submits the rating dialog and moves on to leftovers.
    pub fn submit_rating(&mut self, rating: Rating, kids_disliked: bool) -> Result<Vec<Effect>> {
        self.expect(Stage::Rating, "submit rating")?;
        self.rating = Some((rating, kids_disliked));
        self.stage = Stage::Leftover;
        Ok(vec![Effect::Report {
            event: rating.event(),
            context: Some(json!({
                "kid_dislike": kids_disliked,
                "rating": rating.as_str(),
            })),
        }])
    }

    /// Dismisses the rating dialog without reporting anything.
    pub fn skip_rating(&mut self) -> Result<Vec<Effect>> {
        self.expect(Stage::Rating, "skip rating")?;
        self.stage = Stage::Leftover;
        Ok(Vec::new())
    }

    /// Submits the leftover dialog and ends the flow.
    ///
    /// Leftovers are only recorded when at least one serving remains.
    pub fn submit_leftover(&mut self, choice: LeftoverChoice) -> Result<Vec<Effect>> {
        self.expect(Stage::Leftover, "submit leftovers")?;
        let servings = choice.servings();
        self.leftover_servings = Some(servings);
        self.stage = Stage::Done;

        let mut effects = vec![Effect::Report {
            event: TelemetryEvent::LeftoverMark,
            context: Some(json!({
                "servings": servings,
                "option_selected": choice.option_index(),
            })),
        }];
        if servings > 0 {
            effects.push(Effect::CreateLeftover { servings });
        }
        Ok(effects)
    }

    /// Dismisses the leftover dialog and ends the flow.
    pub fn skip_leftover(&mut self) -> Result<Vec<Effect>> {
        self.expect(Stage::Leftover, "skip leftovers")?;
        self.stage = Stage::Done;
        Ok(Vec::new())
    }

    fn expect(&self, stage: Stage, action: &str) -> Result<()> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(WeeknightError::invalid_transition(self.stage, action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingCount;

    const WITH_RATING: FeedbackConfig = FeedbackConfig {
        emoji_feedback: true,
    };
    const WITHOUT_RATING: FeedbackConfig = FeedbackConfig {
        emoji_feedback: false,
    };

    fn create_leftover_calls(effects: &[Effect]) -> Vec<u32> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::CreateLeftover { servings } => Some(*servings),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_begin_reports_cook_complete() {
        let (_, effects) = Sequencer::begin(WITH_RATING);
        assert_eq!(
            effects,
            vec![Effect::Report {
                event: TelemetryEvent::CookComplete,
                context: None
            }]
        );
    }

    #[test]
    fn test_rating_skipped_when_flag_disabled() {
        let (mut seq, _) = Sequencer::begin(WITHOUT_RATING);
        assert_eq!(seq.stage(), Stage::Leftover);
        assert!(seq.submit_rating(Rating::Good, false).is_err());
        assert!(seq.skip_rating().is_err());
        assert_eq!(seq.stage(), Stage::Leftover);
    }

    #[test]
    fn test_rating_precedes_leftover_when_flag_enabled() {
        let (mut seq, _) = Sequencer::begin(WITH_RATING);
        assert_eq!(seq.stage(), Stage::Rating);
        assert!(seq.submit_leftover(LeftoverChoice::One).is_err());

        let effects = seq.submit_rating(Rating::Bad, true).unwrap();
        assert_eq!(seq.stage(), Stage::Leftover);
        assert_eq!(seq.rating(), Some((Rating::Bad, true)));
        assert_eq!(
            effects,
            vec![Effect::Report {
                event: TelemetryEvent::EmojiBad,
                context: Some(json!({ "kid_dislike": true, "rating": "bad" })),
            }]
        );
    }

    #[test]
    fn test_skipping_rating_emits_nothing() {
        let (mut seq, _) = Sequencer::begin(WITH_RATING);
        assert!(seq.skip_rating().unwrap().is_empty());
        assert_eq!(seq.stage(), Stage::Leftover);
        assert_eq!(seq.rating(), None);
    }

    #[test]
    fn test_zero_leftovers_do_not_create_record() {
        let (mut seq, _) = Sequencer::begin(WITHOUT_RATING);
        let effects = seq.submit_leftover(LeftoverChoice::None).unwrap();
        assert!(create_leftover_calls(&effects).is_empty());
        assert_eq!(
            effects,
            vec![Effect::Report {
                event: TelemetryEvent::LeftoverMark,
                context: Some(json!({ "servings": 0, "option_selected": 0 })),
            }]
        );
        assert!(seq.is_done());
    }

    #[test]
    fn test_leftovers_create_exactly_one_record() {
        let choices = [
            (LeftoverChoice::One, 1),
            (LeftoverChoice::Several(ServingCount::default()), 2),
            (LeftoverChoice::Several(ServingCount::clamped(10)), 10),
        ];
        for (choice, expected) in choices {
            let (mut seq, _) = Sequencer::begin(WITHOUT_RATING);
            let effects = seq.submit_leftover(choice).unwrap();
            assert_eq!(create_leftover_calls(&effects), vec![expected]);
            assert_eq!(seq.leftover_servings(), Some(expected));
        }
    }

    #[test]
    fn test_skipping_leftover_ends_flow_silently() {
        let (mut seq, _) = Sequencer::begin(WITHOUT_RATING);
        assert!(seq.skip_leftover().unwrap().is_empty());
        assert!(seq.is_done());
        assert_eq!(seq.leftover_servings(), None);
    }

    #[test]
    fn test_done_rejects_further_actions() {
        let (mut seq, _) = Sequencer::begin(WITHOUT_RATING);
        seq.skip_leftover().unwrap();

        let err = seq.submit_leftover(LeftoverChoice::One).unwrap_err();
        assert_eq!(err.to_string(), "Cannot submit leftovers while in done state");
        assert!(seq.skip_leftover().is_err());
        assert!(seq.is_done());
    }
}
