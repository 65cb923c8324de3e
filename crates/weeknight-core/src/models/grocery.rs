//! Grocery list models.

use serde::{Deserialize, Serialize};

/// One line on a grocery list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    pub name: String,
    pub qty: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub aisle: String,
    #[serde(default)]
    pub checked: bool,
}

/// Items grouped under one store aisle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AisleGroup {
    pub aisle: String,
    pub items: Vec<GroceryItem>,
}

/// A generated grocery list, already grouped by aisle by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryList {
    #[serde(rename = "grocery_list")]
    pub aisles: Vec<AisleGroup>,
    pub total_items: u32,
    pub recipes_included: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}
