//! Parameter structures for backend operations
//!
//! These structures are shared by every interface (the CLI today, anything
//! embedding the library tomorrow) and double as the JSON request bodies sent
//! to the backend. They carry no framework-specific derives beyond serde;
//! interface layers define their own argument types and convert into these.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   HTTP Body     │
//! │  (clap derives) │───▶│ (serde derives) │───▶│    (JSON)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TelemetryEvent;

/// Body of a telemetry report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReport {
    /// Name of the lifecycle event
    pub event: TelemetryEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Free-form event details (e.g. servings, rating)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Parameters for recording leftovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateLeftover {
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,
    /// Servings left; always greater than zero
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    /// Override for how long the leftover stays safe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,
}

/// Parameters for listing leftovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLeftovers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    #[serde(default)]
    pub include_consumed: bool,
    #[serde(default)]
    pub include_expired: bool,
}

impl ListLeftovers {
    /// Query-string pairs, omitting unset values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = &self.user_id {
            pairs.push(("user_id", user_id.clone()));
        }
        if let Some(household_id) = &self.household_id {
            pairs.push(("household_id", household_id.clone()));
        }
        pairs.push(("include_consumed", self.include_consumed.to_string()));
        pairs.push(("include_expired", self.include_expired.to_string()));
        pairs
    }
}

/// Filters for searching the recipe catalog. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSearch {
    /// Free-text query matched against titles and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_type: Option<String>,
    /// Required appliance, e.g. `air_fryer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookware_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RecipeSearch {
    /// Query-string pairs, omitting unset values.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("q", &self.q),
            ("cook_type", &self.cook_type),
            ("equipment", &self.equipment),
            ("cuisine", &self.cuisine),
            ("tags", &self.tags),
        ];
        let numbers = [
            ("time_max", self.time_max),
            ("cookware_max", self.cookware_max),
            ("page", self.page),
            ("limit", self.limit),
        ];

        let mut pairs: Vec<_> = text
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect();
        pairs.extend(
            numbers
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
        );
        if let Some(kid_friendly) = self.kid_friendly {
            pairs.push(("kid_friendly", kid_friendly.to_string()));
        }
        pairs
    }
}

/// Parameters for marking a leftover as eaten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumeLeftover {
    /// ID of the leftover record
    #[serde(skip)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Estimated pantry stock sent along with a suggestion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub name: String,
    pub qty_est_range: QuantityRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub lower: f64,
    pub upper: f64,
}

/// Parameters for asking what to cook tonight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TonightRequest {
    pub user_id: String,
    /// What the user typed, e.g. "something quick with chicken"
    pub text_input: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pantry_snapshot: Vec<PantryItem>,
}

/// One recipe to shop for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryRecipe {
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

/// Parameters for generating a grocery list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryRequest {
    pub recipes: Vec<GroceryRecipe>,
    /// Items already at home, skipped by the list generator
    #[serde(default)]
    pub pantry_snapshot: Vec<PantryName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_preference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryName {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_telemetry_report_omits_missing_fields() {
        let report = TelemetryReport {
            event: TelemetryEvent::CookStart,
            recipe_id: Some("r-1".to_string()),
            user_id: None,
            context: None,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "event": "cook_start", "recipe_id": "r-1" })
        );
    }

    #[test]
    fn test_list_leftovers_query_pairs() {
        let params = ListLeftovers {
            user_id: Some("u-1".to_string()),
            include_expired: true,
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("user_id", "u-1".to_string()),
                ("include_consumed", "false".to_string()),
                ("include_expired", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_consume_leftover_body_excludes_id() {
        let params = ConsumeLeftover {
            id: "l-9".to_string(),
            user_id: Some("u-1".to_string()),
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({ "user_id": "u-1" }));
    }

    #[test]
    fn test_recipe_search_query_skips_unset_filters() {
        assert!(RecipeSearch::default().query_pairs().is_empty());

        let params = RecipeSearch {
            equipment: Some("air_fryer".to_string()),
            time_max: Some(30),
            kid_friendly: Some(true),
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(
            params.query_pairs(),
            vec![
                ("equipment", "air_fryer".to_string()),
                ("time_max", "30".to_string()),
                ("limit", "20".to_string()),
                ("kid_friendly", "true".to_string()),
            ]
        );
    }
}
