//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::{Countdown, LocalDateTime};
use crate::models::{
    FeatureFlags, FlagSource, GroceryItem, GroceryList, Leftover, Rating, Recipe, RecipeCard,
    Step, SuggestionCard,
};

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FlagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagSource::Database => write!(f, "database"),
            FlagSource::Defaults => write!(f, "defaults"),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if let Some(minutes) = self.time_total_min {
            writeln!(f, "- Time: {minutes} min")?;
        }
        if let Some(servings) = self.servings {
            writeln!(f, "- Servings: {servings}")?;
        }
        if let Some(id) = &self.recipe_id {
            writeln!(f, "- ID: `{id}`")?;
        }
        Ok(())
    }
}

impl Step {
    /// Details shown under the instruction, in a fixed order.
    fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(zh) = &self.instruction_zh {
            writeln!(f, "> {zh}")?;
            writeln!(f)?;
        }
        if let Some(seconds) = self.timer_sec.filter(|s| *s > 0) {
            writeln!(f, "- Timer: {}", Countdown(seconds))?;
        }
        if let Some(temp) = self.temperature_f {
            writeln!(f, "- Temperature: {temp}°F")?;
        }
        if let Some(equipment) = &self.equipment {
            writeln!(f, "- Equipment: {equipment}")?;
        }
        if let Some(cue) = &self.doneness_cue {
            writeln!(f, "- Done when: {cue}")?;
        }
        if let Some(hint) = &self.cleanup_hint {
            writeln!(f, "- While you wait: {hint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.instruction)?;
        writeln!(f)?;
        self.fmt_details(f)
    }
}

impl fmt::Display for SuggestionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kid = if self.kid_friendly { " 👶" } else { "" };
        writeln!(f, "## {}{kid}", self.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} min · {} cookware · serves {}",
            self.time_total_min, self.cookware_count, self.servings
        )?;
        writeln!(f, "- ID: `{}`", self.recipe_id)?;

        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        for sub in &self.substitutions_applied {
            writeln!(f, "- Swap: {} → {}", sub.original, sub.substitute)?;
        }
        if let Some(leftover) = self.leftover_potential.as_ref().filter(|l| l.suitable) {
            match &leftover.transformation {
                Some(idea) => writeln!(f, "- Leftovers: keeps {}h ({idea})", leftover.safe_hours)?,
                None => writeln!(f, "- Leftovers: keeps {}h", leftover.safe_hours)?,
            }
        }
        if !self.rank_reasons.is_empty() {
            writeln!(f)?;
            writeln!(f, "*{}*", self.rank_reasons.join("; "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kid = if self.kid_friendly { " 👶" } else { "" };
        writeln!(f, "## {}{kid}", self.title)?;
        writeln!(f)?;
        if let Some(zh) = &self.title_zh {
            writeln!(f, "> {zh}")?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "- {} min · {} cookware · serves {}",
            self.time_total_min, self.cookware_count, self.servings
        )?;
        writeln!(f, "- ID: `{}`", self.recipe_id)?;
        if !self.equipment.is_empty() {
            writeln!(f, "- Equipment: {}", self.equipment.join(", "))?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Leftover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.recipe_title.as_deref().unwrap_or(&self.recipe_id);
        let consumed = if self.is_consumed { " (eaten)" } else { "" };
        writeln!(f, "## {title}{consumed}")?;
        writeln!(f)?;
        writeln!(f, "- Servings: {}", self.servings)?;
        writeln!(f, "- Safe until: {}", LocalDateTime(&self.safe_until))?;
        if let Some(idea) = &self.transformation {
            writeln!(f, "- Idea: {idea}")?;
        }
        writeln!(f, "- ID: `{}`", self.id)?;
        writeln!(f)
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        match &self.unit {
            Some(unit) => write!(f, "- [{mark}] {} {unit} {}", self.qty, self.name),
            None => write!(f, "- [{mark}] {} {}", self.qty, self.name),
        }
    }
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Grocery list ({} items, {} recipes)",
            self.total_items, self.recipes_included
        )?;
        writeln!(f)?;

        if self.aisles.is_empty() {
            return writeln!(f, "Nothing to buy.");
        }
        for group in &self.aisles {
            writeln!(f, "## {}", group.aisle)?;
            writeln!(f)?;
            for item in &group.items {
                writeln!(f, "{item}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for FeatureFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Feature flags ({})", self.source())?;
        writeln!(f)?;
        for (key, enabled) in self.iter() {
            writeln!(f, "- {key}: {}", if enabled { "on" } else { "off" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::AisleGroup;

    #[test]
    fn test_step_display_includes_timer_and_cues() {
        let step = Step {
            id: "s1".to_string(),
            step_order: 1,
            instruction: "Sear the chicken".to_string(),
            instruction_zh: None,
            duration_sec: Some(300),
            timer_sec: Some(90),
            method: Some("sear".to_string()),
            equipment: Some("skillet".to_string()),
            concurrent_group: None,
            cleanup_hint: None,
            temperature_f: None,
            doneness_cue: Some("golden brown".to_string()),
            icon_keys: vec![],
        };
        let output = step.to_string();
        assert!(output.starts_with("Sear the chicken"));
        assert!(output.contains("- Timer: 1:30"));
        assert!(output.contains("- Equipment: skillet"));
        assert!(output.contains("- Done when: golden brown"));
        assert!(!output.contains("While you wait"));
    }

    #[test]
    fn test_leftover_display_falls_back_to_recipe_id() {
        let leftover = Leftover {
            id: "l1".to_string(),
            household_id: None,
            recipe_id: "recipe-9".to_string(),
            recipe_title: None,
            servings: 3,
            safe_until: Timestamp::now(),
            transformation: Some("fried rice".to_string()),
            is_consumed: true,
            consumed_at: None,
            created_at: Timestamp::now(),
        };
        let output = leftover.to_string();
        assert!(output.contains("## recipe-9 (eaten)"));
        assert!(output.contains("- Servings: 3"));
        assert!(output.contains("- Idea: fried rice"));
    }

    #[test]
    fn test_grocery_list_display_groups_by_aisle() {
        let list = GroceryList {
            aisles: vec![AisleGroup {
                aisle: "Produce".to_string(),
                items: vec![
                    GroceryItem {
                        name: "scallions".to_string(),
                        qty: 2.0,
                        unit: Some("bunch".to_string()),
                        aisle: "Produce".to_string(),
                        checked: false,
                    },
                    GroceryItem {
                        name: "limes".to_string(),
                        qty: 3.0,
                        unit: None,
                        aisle: "Produce".to_string(),
                        checked: true,
                    },
                ],
            }],
            total_items: 2,
            recipes_included: 1,
            trace_id: None,
        };
        let output = list.to_string();
        assert!(output.contains("## Produce"));
        assert!(output.contains("- [ ] 2 bunch scallions"));
        assert!(output.contains("- [x] 3 limes"));
    }

    #[test]
    fn test_flags_display_lists_source() {
        let output = FeatureFlags::defaults().to_string();
        assert!(output.contains("(defaults)"));
        assert!(output.contains("- emoji_feedback: on"));
        assert!(output.contains("- autoplan: off"));
    }

    #[test]
    fn test_recipe_card_display() {
        let card = RecipeCard {
            recipe_id: "r-3".to_string(),
            slug: "air-fryer-wings".to_string(),
            title: "Air Fryer Wings".to_string(),
            title_zh: None,
            hero_image_url: None,
            time_total_min: 25,
            cookware_count: 1,
            servings: 4,
            difficulty: "easy".to_string(),
            kid_friendly: false,
            tags: vec![],
            cook_type: vec!["air_fry".to_string()],
            equipment: vec!["air_fryer".to_string()],
            cuisine: None,
        };
        assert_eq!(
            card.to_string(),
            "## Air Fryer Wings\n\n- 25 min · 1 cookware · serves 4\n- ID: `r-3`\n- Equipment: air_fryer\n\n"
        );
    }
}
