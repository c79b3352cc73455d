//! Pairwise compatibility analysis of a selection

use super::selection::StackSelection;
use crate::stack::{CompatibilityCatalog, TechnologyId};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One directed catalog edge between two selected technologies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCompatibility {
    pub tech_a: TechnologyId,
    pub tech_b: TechnologyId,
    pub score: u8,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<String>>,
}

/// Display label for an average score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CompatibilityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => CompatibilityRating::Excellent,
            75..=89 => CompatibilityRating::Good,
            60..=74 => CompatibilityRating::Fair,
            _ => CompatibilityRating::Poor,
        }
    }
}

impl fmt::Display for CompatibilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompatibilityRating::Excellent => "Excellent",
            CompatibilityRating::Good => "Good",
            CompatibilityRating::Fair => "Fair",
            CompatibilityRating::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Analysis of a full selection, ready for output
#[derive(Debug, Clone, Serialize)]
pub struct StackReport {
    pub frontend: Vec<TechnologyId>,
    pub backend: Vec<TechnologyId>,
    pub pairs: Vec<PairCompatibility>,
    pub average_score: Option<u8>,
    pub rating: Option<CompatibilityRating>,
}

pub struct CompatibilityAnalyzer<'a> {
    catalog: &'a CompatibilityCatalog,
}

impl<'a> CompatibilityAnalyzer<'a> {
    pub fn new(catalog: &'a CompatibilityCatalog) -> Self {
        Self { catalog }
    }

    /// Every ordered pair of distinct selected technologies with a catalog edge.
    ///
    /// `x -> y` and `y -> x` are looked up independently and both reported when present.
    pub fn analyze(&self, selection: &StackSelection) -> Vec<PairCompatibility> {
        let selected = selection.all_selected();
        let mut pairs = Vec::new();

        for x in &selected {
            for y in &selected {
                if x.id == y.id {
                    continue;
                }
                if let Some(edge) = self.catalog.get_edge(&x.id, &y.id) {
                    pairs.push(PairCompatibility {
                        tech_a: x.id.clone(),
                        tech_b: y.id.clone(),
                        score: edge.score,
                        note: edge.note.clone(),
                        benefits: non_empty(&edge.benefits),
                        conflicts: non_empty(&edge.conflicts),
                    });
                }
            }
        }

        debug!(
            selected = selected.len(),
            pairs = pairs.len(),
            "Analyzed selection"
        );
        pairs
    }

    pub fn report(&self, selection: &StackSelection) -> StackReport {
        let pairs = self.analyze(selection);
        let average_score = average_score(&pairs);

        StackReport {
            frontend: ids(selection, crate::stack::Zone::Frontend),
            backend: ids(selection, crate::stack::Zone::Backend),
            pairs,
            average_score,
            rating: average_score.map(CompatibilityRating::from_score),
        }
    }
}

/// Mean of all pair scores rounded to the nearest integer (halves round up)
pub fn average_score(pairs: &[PairCompatibility]) -> Option<u8> {
    if pairs.is_empty() {
        return None;
    }
    let total: u32 = pairs.iter().map(|p| u32::from(p.score)).sum();
    let count = pairs.len() as u32;
    let rounded = (total * 2 + count) / (count * 2);
    u8::try_from(rounded).ok()
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items.to_vec())
    }
}

fn ids(selection: &StackSelection, zone: crate::stack::Zone) -> Vec<TechnologyId> {
    selection.zone(zone).iter().map(|t| t.id.clone()).collect()
}
