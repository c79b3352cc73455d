//! Technology and compatibility edge definitions
//!
//! A technology declares the zone it belongs to and, optionally, the npm package that
//! installs it. Compatibility edges are directed: an entry on `A` pointing at `B` says
//! nothing about `B`'s view of `A`.

use super::TechnologyId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Placement bucket in a stack, also used as a technology's declared category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Frontend,
    Backend,
}

impl Zone {
    pub const ALL: [Zone; 2] = [Zone::Frontend, Zone::Backend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Frontend => "frontend",
            Zone::Backend => "backend",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(Zone::Frontend),
            "backend" => Ok(Zone::Backend),
            other => Err(format!(
                "Invalid zone: {}. Valid options: frontend, backend",
                other
            )),
        }
    }
}

/// Directed compatibility entry from the owning technology to `target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityEdge {
    pub target: TechnologyId,
    /// 0..=100
    pub score: u8,
    pub note: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

impl CompatibilityEdge {
    pub fn new(target: TechnologyId, score: u8, note: impl Into<String>) -> Self {
        Self {
            target,
            score,
            note: note.into(),
            benefits: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    pub fn with_benefits(mut self, benefits: &[&str]) -> Self {
        self.benefits = benefits.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_conflicts(mut self, conflicts: &[&str]) -> Self {
        self.conflicts = conflicts.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// A cataloged technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: TechnologyId,
    pub category: Zone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub dev_dependency: bool,
    /// Has both a client and a server role and may sit in either zone
    pub fullstack: bool,
    /// Framework-agnostic tool usable in either zone
    pub both: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(
        serialize_with = "serialize_edges",
        skip_serializing_if = "HashMap::is_empty"
    )]
    compatibility: HashMap<TechnologyId, CompatibilityEdge>,
}

fn serialize_edges<S>(
    edges: &HashMap<TechnologyId, CompatibilityEdge>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut sorted: Vec<&CompatibilityEdge> = edges.values().collect();
    sorted.sort_by(|a, b| a.target.name().cmp(b.target.name()));
    serializer.collect_seq(sorted)
}

impl Technology {
    pub fn new(id: TechnologyId, category: Zone) -> Self {
        Self {
            id,
            category,
            package: None,
            dev_dependency: false,
            fullstack: false,
            both: false,
            description: String::new(),
            compatibility: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    pub fn with_package(mut self, package: &str) -> Self {
        self.package = Some(package.to_string());
        self
    }

    pub fn with_dev_package(mut self, package: &str) -> Self {
        self.package = Some(package.to_string());
        self.dev_dependency = true;
        self
    }

    pub fn fullstack(mut self) -> Self {
        self.fullstack = true;
        self
    }

    pub fn both(mut self) -> Self {
        self.both = true;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Adds or replaces the edge towards `edge.target`
    pub fn with_edge(mut self, edge: CompatibilityEdge) -> Self {
        self.compatibility.insert(edge.target.clone(), edge);
        self
    }

    /// True if this technology may be placed into `zone`
    pub fn fits(&self, zone: Zone) -> bool {
        self.category == zone || self.fullstack || self.both
    }

    pub fn edge_to(&self, target: &TechnologyId) -> Option<&CompatibilityEdge> {
        self.compatibility.get(target)
    }

    /// Outgoing edges sorted by target name
    pub fn edges(&self) -> Vec<&CompatibilityEdge> {
        let mut edges: Vec<&CompatibilityEdge> = self.compatibility.values().collect();
        edges.sort_by(|a, b| a.target.name().cmp(b.target.name()));
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.compatibility.len()
    }
}
