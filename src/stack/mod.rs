//! Technology catalog: identifiers, technologies and directed compatibility edges.
//!
//! Technologies are keyed by the strongly-typed [`TechnologyId`] rather than display
//! strings, so a typo in catalog code is a compile error instead of a silently missing
//! edge.
//!
//! # Custom Variants
//!
//! `TechnologyId` has a `Custom(String)` variant for technologies that only exist in a
//! catalog file loaded at runtime. Lookups treat custom and built-in ids uniformly.
//!
//! # Directionality
//!
//! An edge `A -> B` is independent of `B -> A`. The catalog never symmetrises edges;
//! callers that care about an unordered pair must probe both directions.
//!
//! # Example
//!
//! ```
//! use stackbuilder::stack::{CompatibilityCatalog, TechnologyId, Zone};
//!
//! let catalog = CompatibilityCatalog::with_defaults();
//!
//! let frontend = catalog.list_by_category(Zone::Frontend);
//! assert!(!frontend.is_empty());
//!
//! let edge = catalog.get_edge(&TechnologyId::React18, &TechnologyId::TypeScript);
//! assert_eq!(edge.map(|e| e.score), Some(95));
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod catalog;
mod defaults;
pub mod technology;
pub mod technology_id;

pub use catalog::{CatalogError, CompatibilityCatalog};
pub use technology::{CompatibilityEdge, Technology, Zone};
pub use technology_id::TechnologyId;
