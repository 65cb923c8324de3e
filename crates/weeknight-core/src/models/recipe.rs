//! Recipe metadata and suggestion cards.

use serde::{Deserialize, Serialize};

/// Recipe metadata needed to run a cooking session.
///
/// The recipe endpoint returns a much larger document; only the fields the
/// client renders are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,

    /// Display title of the recipe
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// Total time from start to plate, in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_total_min: Option<u32>,
}

/// Recipe summary returned by catalog search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeCard {
    pub recipe_id: String,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    pub time_total_min: u32,
    pub cookware_count: u32,
    pub servings: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub kid_friendly: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cook_type: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipePage {
    #[serde(rename = "data", default)]
    pub recipes: Vec<RecipeCard>,
    /// Matches across all pages
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub has_more: bool,
}

/// A substitution the suggestion engine applied to fit the pantry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Substitution {
    pub original: String,
    pub substitute: String,
    pub level: String,
}

/// Whether a dish keeps well as leftovers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeftoverPotential {
    pub suitable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,
    pub safe_hours: u32,
}

/// Per-serving nutrition estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_kcal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
}

/// One ranked recipe suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionCard {
    pub recipe_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    pub time_total_min: u32,
    pub cookware_count: u32,
    pub servings: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub kid_friendly: bool,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub substitutions_applied: Vec<Substitution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leftover_potential: Option<LeftoverPotential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    pub score: f64,
    #[serde(default)]
    pub rank_reasons: Vec<String>,
}

/// A quick side dish that fits into the main timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SideDish {
    pub name: String,
    pub time_min: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_window: Option<String>,
}

/// Response of the tonight suggestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TonightResponse {
    pub ok: bool,
    #[serde(default)]
    pub suggestions: Vec<SuggestionCard>,
    #[serde(default)]
    pub side_dishes: Vec<SideDish>,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub decision_time_ms: u64,
    /// Asked back when the request was too vague to rank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarifying_question: Option<String>,
}
