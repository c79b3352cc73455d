//! Stack builder: selection state and the views derived from it.
//!
//! - [`selection`]: the frontend/backend zones and placement rules
//! - [`analyzer`]: pairwise compatibility and the average score
//! - [`install`]: install plans and npm/yarn/pnpm commands
//!
//! Derived views are never cached; they are recomputed from the selection on each call.

pub mod analyzer;
pub mod install;
pub mod selection;

pub use analyzer::{
    average_score, CompatibilityAnalyzer, CompatibilityRating, PairCompatibility, StackReport,
};
pub use install::{
    plan, render, render_all, InstallPlan, PackageManager, ZoneCommand, ZonePlan,
    EMPTY_PLAN_PLACEHOLDER,
};
pub use selection::{PlacementError, StackSelection};
