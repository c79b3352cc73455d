//! stackbuilder - technology stack builder with compatibility scoring
//!
//! This library keeps a static catalog of web technologies with directed,
//! scored compatibility entries between them. A stack is built by placing
//! technologies into a frontend and a backend zone; the analyzer scores every
//! selected pair and the install planner turns the selection into npm, yarn and
//! pnpm commands.
//!
//! # Core Concepts
//!
//! - **Catalog**: The set of known technologies, their packages and their
//!   compatibility entries. Entries are directed: A -> B says nothing about B -> A.
//! - **Zones**: A technology fits a zone when its category matches, or when it is
//!   fullstack or zone-agnostic.
//! - **Analysis**: Every ordered pair of selected technologies with a catalog entry,
//!   plus the rounded average score.
//! - **Install plan**: Per-zone runtime and dev package lists, rendered per
//!   package manager. Commands are printed, never executed.
//!
//! # Example Usage
//!
//! ```
//! use stackbuilder::{CompatibilityAnalyzer, CompatibilityCatalog, StackSelection, TechnologyId, Zone};
//! use std::sync::Arc;
//!
//! let catalog = CompatibilityCatalog::with_defaults();
//! let mut selection = StackSelection::new();
//!
//! for id in [TechnologyId::React18, TechnologyId::TypeScript] {
//!     let tech = catalog.get(&id).unwrap();
//!     selection.add(Zone::Frontend, Arc::clone(tech)).unwrap();
//! }
//!
//! let report = CompatibilityAnalyzer::new(&catalog).report(&selection);
//! assert_eq!(report.pairs.len(), 2);
//! assert_eq!(report.average_score, Some(94));
//! ```
//!
//! # Project Structure
//!
//! - [`stack`]: Technology identifiers, catalog entries and the compatibility catalog
//! - [`builder`]: Zone selection, pair analysis and install planning
//! - [`cli`]: Command-line arguments, handlers and output formatting

pub mod builder;
pub mod cli;
pub mod config;
pub mod stack;
pub mod util;

pub use builder::{
    plan, render, render_all, CompatibilityAnalyzer, CompatibilityRating, InstallPlan,
    PackageManager, PairCompatibility, PlacementError, StackReport, StackSelection, ZonePlan,
};
pub use config::{ConfigError, StackBuilderConfig};
pub use stack::{
    CatalogError, CompatibilityCatalog, CompatibilityEdge, Technology, TechnologyId, Zone,
};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
