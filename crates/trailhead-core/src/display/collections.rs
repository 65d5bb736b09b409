//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{
    catalog::{aliases::SPECIALIZATION_ALIASES, Catalog},
    models::PlanSummary,
};

/// Newtype wrapper for displaying stored plan summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use trailhead_core::{
///     catalog::{SkillLevel, Specialization},
///     display::PlanSummaries,
///     models::PlanSummary,
/// };
///
/// let summary = PlanSummary {
///     learner_id: "ada".to_string(),
///     specialization: Specialization::DataScience,
///     skill_level: SkillLevel::Beginner,
///     total_weeks: 8,
///     completed_topics: 2,
///     total_topics: 8,
///     completion_percentage: 25,
///     current_phase: 1,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = PlanSummaries(vec![summary]).to_string();
/// assert!(output.contains("ada: Data Science (Beginner) (2/8)"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No stored plans.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Markdown overview of a catalog: specializations with their aliases and
/// topic counts, followed by the skill table.
pub struct CatalogListing<'a>(pub &'a Catalog);

impl fmt::Display for CatalogListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.0;

        writeln!(f, "## Specializations")?;
        writeln!(f)?;
        writeln!(f, "| Specialization | Alias | Topics per list |")?;
        writeln!(f, "|:-|:-|:-|")?;
        for specialization in catalog.specializations() {
            let alias = SPECIALIZATION_ALIASES
                .entries()
                .iter()
                .find(|(_, target)| *target == specialization)
                .map_or("-", |(alias, _)| *alias);
            let counts = catalog
                .lookup(specialization)
                .lists()
                .iter()
                .map(|list| list.len().to_string())
                .collect::<Vec<_>>()
                .join(" / ");
            writeln!(f, "| {specialization} | `{alias}` | {counts} |")?;
        }
        writeln!(f)?;

        writeln!(f, "## Skill Levels")?;
        writeln!(f)?;
        writeln!(f, "| Level | Weeks | Difficulty | Topic budget |")?;
        writeln!(f, "|:-|:-|:-|:-|")?;
        for (level, config) in catalog.skill_levels() {
            writeln!(
                f,
                "| {level} | {} | {} | {} |",
                config.weeks, config.difficulty, config.topics
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summaries() {
        let summaries = PlanSummaries::default();
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No stored plans.\n");
    }

    #[test]
    fn test_catalog_listing_includes_aliases_and_skill_table() {
        let catalog = Catalog::builtin();
        let output = CatalogListing(&catalog).to_string();

        assert!(output.contains("| Machine Learning | `machine_learning` | 4 / 4 / 4 / 4 |"));
        assert!(output.contains("| Beginner | 8 | 1 | 5 |"));
        assert!(output.contains("| Expert | 20 | 4 | 15 |"));
    }
}
