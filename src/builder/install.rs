//! Install command generation
//!
//! Turns a selection into per-zone package lists and renders them as npm, yarn or
//! pnpm commands. Commands are only rendered, never executed.

use super::selection::StackSelection;
use crate::stack::Zone;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Shown when a zone has nothing to install
pub const EMPTY_PLAN_PLACEHOLDER: &str = "# No packages to install";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Command prefix for runtime dependencies, e.g. `npm install`
    fn install_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn add",
            PackageManager::Pnpm => "pnpm add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(format!(
                "Invalid package manager: {}. Valid options: npm, yarn, pnpm",
                other
            )),
        }
    }
}

/// Deduplicated package lists for one zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZonePlan {
    pub runtime: Vec<String>,
    pub dev: Vec<String>,
}

impl ZonePlan {
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub frontend: ZonePlan,
    pub backend: ZonePlan,
}

impl InstallPlan {
    pub fn zone(&self, zone: Zone) -> &ZonePlan {
        match zone {
            Zone::Frontend => &self.frontend,
            Zone::Backend => &self.backend,
        }
    }
}

/// A rendered command for one zone and package manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCommand {
    pub zone: Zone,
    pub package_manager: PackageManager,
    pub command: String,
}

/// Builds the install plan for a selection.
///
/// Technologies without a package contribute nothing. Within a zone and dependency
/// kind the first occurrence of a package name wins.
pub fn plan(selection: &StackSelection) -> InstallPlan {
    InstallPlan {
        frontend: zone_plan(selection, Zone::Frontend),
        backend: zone_plan(selection, Zone::Backend),
    }
}

fn zone_plan(selection: &StackSelection, zone: Zone) -> ZonePlan {
    let mut plan = ZonePlan::default();
    let mut seen_runtime = HashSet::new();
    let mut seen_dev = HashSet::new();

    for technology in selection.zone(zone) {
        let Some(package) = technology.package.as_deref() else {
            continue;
        };
        if technology.dev_dependency {
            if seen_dev.insert(package) {
                plan.dev.push(package.to_string());
            }
        } else if seen_runtime.insert(package) {
            plan.runtime.push(package.to_string());
        }
    }

    plan
}

/// Renders a zone plan as at most two lines: runtime install, then dev install
pub fn render(zone_plan: &ZonePlan, package_manager: PackageManager) -> String {
    let prefix = package_manager.install_prefix();
    let mut lines = Vec::with_capacity(2);

    if !zone_plan.runtime.is_empty() {
        lines.push(format!("{} {}", prefix, zone_plan.runtime.join(" ")));
    }
    if !zone_plan.dev.is_empty() {
        lines.push(format!("{} -D {}", prefix, zone_plan.dev.join(" ")));
    }

    if lines.is_empty() {
        EMPTY_PLAN_PLACEHOLDER.to_string()
    } else {
        lines.join("\n")
    }
}

/// Renders every requested package manager for both zones, frontend first
pub fn render_all(plan: &InstallPlan, package_managers: &[PackageManager]) -> Vec<ZoneCommand> {
    let mut commands = Vec::with_capacity(Zone::ALL.len() * package_managers.len());
    for zone in Zone::ALL {
        for &package_manager in package_managers {
            commands.push(ZoneCommand {
                zone,
                package_manager,
                command: render(plan.zone(zone), package_manager),
            });
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::{CompatibilityCatalog, Technology, TechnologyId};
    use std::sync::Arc;

    fn make_zone_plan(runtime: &[&str], dev: &[&str]) -> ZonePlan {
        ZonePlan {
            runtime: runtime.iter().map(|s| s.to_string()).collect(),
            dev: dev.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_npm_runtime_only() {
        assert_eq!(
            render(&make_zone_plan(&["express"], &[]), PackageManager::Npm),
            "npm install express"
        );
    }

    #[test]
    fn test_render_dev_only() {
        assert_eq!(
            render(&make_zone_plan(&[], &["typescript"]), PackageManager::Yarn),
            "yarn add -D typescript"
        );
    }

    #[test]
    fn test_render_both_lines() {
        let plan = make_zone_plan(&["react", "next"], &["typescript", "tailwindcss"]);
        assert_eq!(
            render(&plan, PackageManager::Pnpm),
            "pnpm add react next\npnpm add -D typescript tailwindcss"
        );
        assert_eq!(
            render(&plan, PackageManager::Npm),
            "npm install react next\nnpm install -D typescript tailwindcss"
        );
    }

    #[test]
    fn test_render_empty_placeholder() {
        for pm in PackageManager::ALL {
            assert_eq!(render(&ZonePlan::default(), pm), EMPTY_PLAN_PLACEHOLDER);
        }
    }

    #[test]
    fn test_plan_splits_dev_and_runtime() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();
        for id in [TechnologyId::React18, TechnologyId::TypeScript] {
            selection
                .add(Zone::Frontend, catalog.get(&id).unwrap().clone())
                .unwrap();
        }
        for id in [TechnologyId::NodeJs, TechnologyId::Express, TechnologyId::Prisma] {
            selection
                .add(Zone::Backend, catalog.get(&id).unwrap().clone())
                .unwrap();
        }

        let plan = plan(&selection);
        assert_eq!(plan.frontend.runtime, vec!["react"]);
        assert_eq!(plan.frontend.dev, vec!["typescript"]);
        assert_eq!(plan.backend.runtime, vec!["express"]);
        assert_eq!(plan.backend.dev, vec!["prisma"]);
    }

    #[test]
    fn test_plan_deduplicates_by_package_name() {
        let mut selection = StackSelection::new();
        let react = Technology::new(TechnologyId::React18, Zone::Frontend).with_package("react");
        let query = Technology::new(TechnologyId::TanStackQuery, Zone::Frontend)
            .with_package("@tanstack/react-query");
        let shim = Technology::new(TechnologyId::Custom("React shim".to_string()), Zone::Frontend)
            .with_package("react");

        selection.add(Zone::Frontend, Arc::new(react)).unwrap();
        selection.add(Zone::Frontend, Arc::new(query)).unwrap();
        selection.add(Zone::Frontend, Arc::new(shim)).unwrap();

        let plan = plan(&selection);
        assert_eq!(plan.frontend.runtime, vec!["react", "@tanstack/react-query"]);
        assert!(plan.frontend.dev.is_empty());
    }

    #[test]
    fn test_plan_empty_selection() {
        let plan = plan(&StackSelection::new());
        assert!(plan.frontend.is_empty());
        assert!(plan.backend.is_empty());
    }

    #[test]
    fn test_render_all_order() {
        let plan = InstallPlan {
            frontend: make_zone_plan(&["react"], &[]),
            backend: ZonePlan::default(),
        };
        let commands = render_all(&plan, &PackageManager::ALL);

        assert_eq!(commands.len(), 6);
        assert_eq!(commands[0].zone, Zone::Frontend);
        assert_eq!(commands[0].package_manager, PackageManager::Npm);
        assert_eq!(commands[0].command, "npm install react");
        assert_eq!(commands[2].command, "pnpm add react");
        assert_eq!(commands[3].zone, Zone::Backend);
        assert_eq!(commands[3].command, EMPTY_PLAN_PLACEHOLDER);
    }

    #[test]
    fn test_package_manager_from_str() {
        assert_eq!("PNPM".parse::<PackageManager>(), Ok(PackageManager::Pnpm));
        assert!("bun".parse::<PackageManager>().is_err());
    }
}
