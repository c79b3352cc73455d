//! Compatibility catalog
//!
//! Read-only table of technologies and their directed compatibility edges. The
//! built-in catalog comes from [`CompatibilityCatalog::with_defaults`]; alternative
//! catalogs can be loaded from TOML or JSON documents, which are validated before use.

use super::defaults;
use super::technology::{CompatibilityEdge, Technology, Zone};
use super::TechnologyId;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Unsupported catalog format: {0}. Use a .toml or .json file")]
    UnsupportedFormat(String),

    #[error("Duplicate technology in catalog: {0}")]
    DuplicateTechnology(String),

    #[error("{0} declares a compatibility entry for itself")]
    SelfEdge(String),

    #[error("Score {score} for {from} -> {to} is out of range (0-100)")]
    ScoreOutOfRange { from: String, to: String, score: u16 },

    #[error("{from} references unknown technology {to}")]
    UnknownTarget { from: String, to: String },
}

/// On-disk catalog document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default, rename = "technology")]
    technologies: Vec<TechnologyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TechnologyEntry {
    name: String,
    category: Zone,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    fullstack: bool,
    #[serde(default)]
    both: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    compatibility: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    target: String,
    score: u16,
    #[serde(default)]
    note: String,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    conflicts: Vec<String>,
}

#[derive(Debug)]
pub struct CompatibilityCatalog {
    technologies: Vec<Arc<Technology>>,
    index: HashMap<TechnologyId, usize>,
}

impl CompatibilityCatalog {
    pub fn new() -> Self {
        Self {
            technologies: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The built-in catalog
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for technology in defaults::technologies() {
            catalog.push(technology);
        }
        debug!(technologies = catalog.len(), "Loaded built-in catalog");
        catalog
    }

    /// Builds a catalog after checking name uniqueness, edge targets and self edges
    pub fn from_technologies(technologies: Vec<Technology>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for technology in &technologies {
            if !seen.insert(technology.id.clone()) {
                return Err(CatalogError::DuplicateTechnology(
                    technology.name().to_string(),
                ));
            }
        }

        for technology in &technologies {
            for edge in technology.edges() {
                if edge.target == technology.id {
                    return Err(CatalogError::SelfEdge(technology.name().to_string()));
                }
                if edge.score > 100 {
                    return Err(CatalogError::ScoreOutOfRange {
                        from: technology.name().to_string(),
                        to: edge.target.name().to_string(),
                        score: u16::from(edge.score),
                    });
                }
                if !seen.contains(&edge.target) {
                    return Err(CatalogError::UnknownTarget {
                        from: technology.name().to_string(),
                        to: edge.target.name().to_string(),
                    });
                }
            }
        }

        let mut catalog = Self::new();
        for technology in technologies {
            catalog.push(technology);
        }
        Ok(catalog)
    }

    /// Loads a catalog document, picking the parser from the file extension
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(
            path = %path.display(),
            technologies = catalog.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let declared: Vec<TechnologyId> = document
            .technologies
            .iter()
            .map(|entry| TechnologyId::resolve(&entry.name))
            .collect();
        let mut technologies = Vec::with_capacity(document.technologies.len());

        for (entry, id) in document.technologies.into_iter().zip(declared.iter().cloned()) {
            let mut technology = Technology::new(id, entry.category);
            technology.package = entry.package.filter(|p| !p.trim().is_empty());
            technology.dev_dependency = entry.dev;
            technology.fullstack = entry.fullstack;
            technology.both = entry.both;
            technology.description = entry.description;

            for edge in entry.compatibility {
                let score = u8::try_from(edge.score)
                    .ok()
                    .filter(|s| *s <= 100)
                    .ok_or_else(|| CatalogError::ScoreOutOfRange {
                        from: entry.name.clone(),
                        to: edge.target.clone(),
                        score: edge.score,
                    })?;
                technology = technology.with_edge(CompatibilityEdge {
                    target: resolve_target(&declared, &edge.target),
                    score,
                    note: edge.note,
                    benefits: edge.benefits,
                    conflicts: edge.conflicts,
                });
            }

            technologies.push(technology);
        }

        Self::from_technologies(technologies)
    }

    fn push(&mut self, technology: Technology) {
        self.index
            .insert(technology.id.clone(), self.technologies.len());
        self.technologies.push(Arc::new(technology));
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }

    /// All technologies in catalog order
    pub fn technologies(&self) -> &[Arc<Technology>] {
        &self.technologies
    }

    /// Technologies declared in `category`, in catalog order
    pub fn list_by_category(&self, category: Zone) -> Vec<&Arc<Technology>> {
        self.technologies
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn get(&self, id: &TechnologyId) -> Option<&Arc<Technology>> {
        self.index.get(id).map(|&i| &self.technologies[i])
    }

    /// Resolves a user-supplied name: display name, slug, alias, or a catalog-file name
    pub fn find(&self, name: &str) -> Option<&Arc<Technology>> {
        if let Some(technology) = self.get(&TechnologyId::resolve(name)) {
            return Some(technology);
        }
        let name = name.trim();
        self.technologies
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name) || t.id.slug().eq_ignore_ascii_case(name))
    }

    /// Directed edge lookup; `None` means no known relationship
    pub fn get_edge(&self, from: &TechnologyId, to: &TechnologyId) -> Option<&CompatibilityEdge> {
        self.get(from)?.edge_to(to)
    }

    /// Closest catalog names to a misspelled `name`, best match first
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .technologies
            .iter()
            .map(|t| {
                let score = strsim::jaro_winkler(&needle, &t.name().to_lowercase())
                    .max(strsim::jaro_winkler(&needle, t.id.slug()));
                (score, t.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Edge targets match declared names ignoring ASCII case and keep the declared spelling
fn resolve_target(declared: &[TechnologyId], target: &str) -> TechnologyId {
    let id = TechnologyId::resolve(target);
    if !id.is_custom() {
        return id;
    }
    declared
        .iter()
        .find(|d| d.is_custom() && d.name().eq_ignore_ascii_case(id.name()))
        .cloned()
        .unwrap_or(id)
}

impl Default for CompatibilityCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
