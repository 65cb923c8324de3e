#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use jiff::{Timestamp, ToSpan};
use weeknight_core::{
    api::Backend,
    cook::LoadedRecipe,
    error::{Result, WeeknightError},
    models::{
        FeatureFlags, FlagSource, GroceryList, Leftover, Recipe, RecipePage, Step, Timeline,
        TonightResponse,
    },
    params::{
        ConsumeLeftover, CreateLeftover, GroceryRequest, ListLeftovers, RecipeSearch,
        TelemetryReport, TonightRequest,
    },
    session::Identity,
};

/// A request the fake backend received, with the bearer token it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchRecipe(String),
    FetchTimeline(String),
    TimelineDelivered(String),
    Report(TelemetryReport, Option<String>),
    CreateLeftover(CreateLeftover, Option<String>),
    Flags(Option<Vec<String>>),
}

/// In-memory backend that records every call and fails on demand.
#[derive(Default)]
pub struct FakeBackend {
    pub steps: Vec<Step>,
    pub flags: Vec<(String, bool)>,
    pub fail_recipe: bool,
    pub fail_timeline: bool,
    pub fail_reports: bool,
    pub fail_leftovers: bool,
    pub fail_flags: bool,
    /// Delay before the timeline answers
    pub timeline_delay: Option<Duration>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reports(&self) -> Vec<TelemetryReport> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Report(report, _) => Some(report),
                _ => None,
            })
            .collect()
    }

    pub fn leftovers_created(&self) -> Vec<(CreateLeftover, Option<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateLeftover(input, token) => Some((input, token)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn unavailable() -> WeeknightError {
    WeeknightError::Api {
        status: 503,
        message: "Service unavailable".to_string(),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn fetch_recipe(&self, recipe_id: &str, _token: Option<&str>) -> Result<Recipe> {
        self.record(Call::FetchRecipe(recipe_id.to_string()));
        if self.fail_recipe {
            return Err(unavailable());
        }
        Ok(test_recipe(recipe_id))
    }

    async fn fetch_timeline(&self, recipe_id: &str, _token: Option<&str>) -> Result<Vec<Step>> {
        self.record(Call::FetchTimeline(recipe_id.to_string()));
        if let Some(delay) = self.timeline_delay {
            tokio::time::sleep(delay).await;
        }
        self.record(Call::TimelineDelivered(recipe_id.to_string()));
        if self.fail_timeline {
            return Err(unavailable());
        }
        Ok(self.steps.clone())
    }

    async fn search_recipes(
        &self,
        _params: &RecipeSearch,
        _token: Option<&str>,
    ) -> Result<RecipePage> {
        Ok(RecipePage::default())
    }

    async fn report_event(&self, report: &TelemetryReport, token: Option<&str>) -> Result<()> {
        self.record(Call::Report(report.clone(), token.map(str::to_string)));
        if self.fail_reports {
            return Err(unavailable());
        }
        Ok(())
    }

    async fn create_leftover(
        &self,
        input: &CreateLeftover,
        token: Option<&str>,
    ) -> Result<Leftover> {
        self.record(Call::CreateLeftover(input.clone(), token.map(str::to_string)));
        if self.fail_leftovers {
            return Err(unavailable());
        }
        let now = Timestamp::now();
        Ok(Leftover {
            id: "leftover-1".to_string(),
            household_id: None,
            recipe_id: input.recipe_id.clone(),
            recipe_title: input.recipe_title.clone(),
            servings: input.servings,
            safe_until: now.checked_add(72.hours()).unwrap_or(now),
            transformation: None,
            is_consumed: false,
            consumed_at: None,
            created_at: now,
        })
    }

    async fn get_feature_flags(
        &self,
        keys: Option<&[String]>,
        _token: Option<&str>,
    ) -> Result<FeatureFlags> {
        self.record(Call::Flags(keys.map(<[String]>::to_vec)));
        if self.fail_flags {
            return Err(unavailable());
        }
        Ok(FeatureFlags::with_overrides(
            self.flags.clone(),
            FlagSource::Database,
        ))
    }

    async fn tonight(
        &self,
        _request: &TonightRequest,
        _token: Option<&str>,
    ) -> Result<TonightResponse> {
        Err(unavailable())
    }

    async fn list_leftovers(
        &self,
        _params: &ListLeftovers,
        _token: Option<&str>,
    ) -> Result<Vec<Leftover>> {
        Ok(Vec::new())
    }

    async fn consume_leftover(
        &self,
        _params: &ConsumeLeftover,
        _token: Option<&str>,
    ) -> Result<Leftover> {
        Err(unavailable())
    }

    async fn generate_grocery_list(
        &self,
        _request: &GroceryRequest,
        _token: Option<&str>,
    ) -> Result<GroceryList> {
        Err(unavailable())
    }
}

pub fn test_recipe(recipe_id: &str) -> Recipe {
    Recipe {
        recipe_id: Some(recipe_id.to_string()),
        title: "Sheet Pan Chicken".to_string(),
        hero_image_url: None,
        servings: Some(4),
        time_total_min: Some(35),
    }
}

/// Steps with the given timer seeds, in order.
pub fn steps_with_timers(seeds: &[u32]) -> Vec<Step> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| Step {
            id: format!("step-{i}"),
            step_order: i as u32 + 1,
            instruction: format!("Do step {}", i + 1),
            instruction_zh: None,
            duration_sec: None,
            timer_sec: Some(*seed),
            method: None,
            equipment: None,
            concurrent_group: None,
            cleanup_hint: None,
            temperature_f: None,
            doneness_cue: None,
            icon_keys: vec![],
        })
        .collect()
}

pub fn loaded_recipe(recipe_id: &str, seeds: &[u32]) -> LoadedRecipe {
    LoadedRecipe {
        recipe: test_recipe(recipe_id),
        timeline: Timeline::new(recipe_id, steps_with_timers(seeds))
            .expect("Failed to build timeline"),
    }
}

pub fn test_identity() -> Identity {
    Identity::new("user-1", "token-abc").expect("Failed to create identity")
}

pub fn shared(backend: FakeBackend) -> Arc<FakeBackend> {
    Arc::new(backend)
}
