//! Backend API access.
//!
//! All business logic (ranking, aisle grouping, substitutions, nutrition)
//! lives in the remote service. This module defines the [`Backend`] seam the
//! rest of the crate talks to, and [`HttpBackend`], the `reqwest`
//! implementation of it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  cook / flags / │    │  dyn Backend    │    │  HttpBackend    │
//! │   telemetry     │───▶│   (trait)       │───▶│  (reqwest)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every operation takes an optional bearer token; anonymous calls are
//! allowed and it is up to the backend to reject them.
//!
//! # Usage
//!
//! ```rust,no_run
//! use weeknight_core::api::{Backend, ClientBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = ClientBuilder::new()
//!     .with_base_url(Some("http://localhost:8080"))
//!     .build()?;
//!
//! let recipe = backend.fetch_recipe("recipe-1", None).await?;
//! println!("Cooking {}", recipe.title);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{FeatureFlags, GroceryList, Leftover, Recipe, RecipePage, Step, TonightResponse},
    params::{
        ConsumeLeftover, CreateLeftover, GroceryRequest, ListLeftovers, RecipeSearch,
        TelemetryReport, TonightRequest,
    },
};

pub mod builder;
pub mod client;


pub use builder::{ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_URL};
pub use client::HttpBackend;

/// Operations the client consumes from the backend service.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Recipe metadata for a cooking session.
    async fn fetch_recipe(&self, recipe_id: &str, token: Option<&str>) -> Result<Recipe>;

    /// The recipe's steps, in whatever order the backend stores them.
    async fn fetch_timeline(&self, recipe_id: &str, token: Option<&str>) -> Result<Vec<Step>>;

    /// One page of catalog recipes matching `params`.
    async fn search_recipes(&self, params: &RecipeSearch, token: Option<&str>)
        -> Result<RecipePage>;

    /// Reports one telemetry event.
    async fn report_event(&self, report: &TelemetryReport, token: Option<&str>) -> Result<()>;

    /// Records leftovers after cooking.
    async fn create_leftover(&self, input: &CreateLeftover, token: Option<&str>)
        -> Result<Leftover>;

    /// Flags for the given keys, or all flags when `keys` is `None`. Missing
    /// keys are filled from the defaults.
    async fn get_feature_flags(
        &self,
        keys: Option<&[String]>,
        token: Option<&str>,
    ) -> Result<FeatureFlags>;

    /// Ranked suggestions for tonight's dinner.
    async fn tonight(&self, request: &TonightRequest, token: Option<&str>)
        -> Result<TonightResponse>;

    async fn list_leftovers(
        &self,
        params: &ListLeftovers,
        token: Option<&str>,
    ) -> Result<Vec<Leftover>>;

    /// Marks a leftover as eaten.
    async fn consume_leftover(
        &self,
        params: &ConsumeLeftover,
        token: Option<&str>,
    ) -> Result<Leftover>;

    async fn generate_grocery_list(
        &self,
        request: &GroceryRequest,
        token: Option<&str>,
    ) -> Result<GroceryList>;
}
