//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a one-line message.

use std::fmt;

use super::datetime::Countdown;
use crate::models::{Leftover, RecipePage, SuggestionCard, Timeline};

/// Numbered list of suggestion cards, in ranking order.
///
/// ```rust
/// use weeknight_core::display::Suggestions;
///
/// assert_eq!(Suggestions(&[]).to_string(), "No suggestions found.\n");
/// ```
pub struct Suggestions<'a>(pub &'a [SuggestionCard]);

impl<'a> fmt::Display for Suggestions<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suggestions found.");
        }
        for (i, card) in self.0.iter().enumerate() {
            writeln!(f, "**#{}**", i + 1)?;
            writeln!(f)?;
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// One page of search results with a paging footer.
pub struct SearchResults<'a>(pub &'a RecipePage);

impl<'a> fmt::Display for SearchResults<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        if page.recipes.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for card in &page.recipes {
            write!(f, "{card}")?;
        }
        write!(f, "Showing {} of {} recipes", page.recipes.len(), page.total)?;
        if page.has_more {
            write!(f, " (more on page {})", page.page + 1)?;
        }
        writeln!(f)
    }
}

/// Leftovers, one section each.
pub struct Leftovers(pub Vec<Leftover>);

impl Leftovers {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Leftover> {
        self.0.iter()
    }
}

impl IntoIterator for Leftovers {
    type Item = Leftover;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Leftovers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No leftovers found.");
        }
        for leftover in &self.0 {
            write!(f, "{leftover}")?;
        }
        Ok(())
    }
}

/// Overview of a whole timeline, shown before cooking starts.
pub struct TimelineView<'a>(pub &'a Timeline);

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.0;
        writeln!(f, "## Steps ({})", timeline.len())?;
        writeln!(f)?;
        for (i, step) in timeline.steps().iter().enumerate() {
            if step.has_timer() {
                writeln!(
                    f,
                    "{}. {} ⏱ {}",
                    i + 1,
                    step.instruction,
                    Countdown(step.timer_seed())
                )?;
            } else {
                writeln!(f, "{}. {}", i + 1, step.instruction)?;
            }
        }

        let total = timeline.total_timer_seconds();
        if total > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "Timers total: {}",
                Countdown(u32::try_from(total).unwrap_or(u32::MAX))
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_results() {
        assert_eq!(
            SearchResults(&RecipePage::default()).to_string(),
            "No recipes found.\n"
        );
    }
}
