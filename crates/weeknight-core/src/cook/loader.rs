//! Timeline loading.

use log::{info, warn};

use crate::{
    api::Backend,
    error::Result,
    models::{Recipe, Timeline},
};

/// Everything needed to render the cooking view.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecipe {
    pub recipe: Recipe,
    pub timeline: Timeline,
}

/// Fetches recipe metadata and steps concurrently.
///
/// Both requests always run to completion before this returns, even when
/// one of them fails early. Any failure (including an empty timeline) is a
/// load failure; there is no automatic retry.
pub async fn load_recipe(
    backend: &dyn Backend,
    recipe_id: &str,
    token: Option<&str>,
) -> Result<LoadedRecipe> {
    let (recipe, steps) = tokio::join!(
        backend.fetch_recipe(recipe_id, token),
        backend.fetch_timeline(recipe_id, token),
    );

    let loaded = recipe.and_then(|recipe| {
        Ok(LoadedRecipe {
            recipe,
            timeline: Timeline::new(recipe_id, steps?)?,
        })
    });

    match &loaded {
        Ok(loaded) => info!(
            "Loaded '{}' with {} steps",
            loaded.recipe.title,
            loaded.timeline.len()
        ),
        Err(e) => warn!("Failed to load recipe {recipe_id}: {e}"),
    }
    loaded
}
