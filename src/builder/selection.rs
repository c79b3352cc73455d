//! Two-zone stack selection
//!
//! A selection owns the technologies a user placed into the frontend and backend
//! zones. Zone placement rules are enforced here; everything derived from a
//! selection (analysis, install plans) is recomputed on demand.

use crate::stack::{Technology, TechnologyId, Zone};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{technology} is a {category} technology and cannot be placed in the {zone} zone")]
    WrongZone {
        technology: String,
        category: Zone,
        zone: Zone,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSelection {
    frontend: Vec<Arc<Technology>>,
    backend: Vec<Arc<Technology>>,
}

impl StackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vec<Arc<Technology>> {
        match zone {
            Zone::Frontend => &mut self.frontend,
            Zone::Backend => &mut self.backend,
        }
    }

    /// Technologies placed in `zone`, in placement order
    pub fn zone(&self, zone: Zone) -> &[Arc<Technology>] {
        match zone {
            Zone::Frontend => &self.frontend,
            Zone::Backend => &self.backend,
        }
    }

    /// Places `technology` into `zone`.
    ///
    /// Re-adding an identical entry is a no-op that keeps its position. A different
    /// entry with the same name replaces the old one and moves to the end.
    pub fn add(&mut self, zone: Zone, technology: Arc<Technology>) -> Result<(), PlacementError> {
        if !technology.fits(zone) {
            warn!(
                technology = technology.name(),
                category = %technology.category,
                zone = %zone,
                "Rejected placement"
            );
            return Err(PlacementError::WrongZone {
                technology: technology.name().to_string(),
                category: technology.category,
                zone,
            });
        }

        let entries = self.zone_mut(zone);
        if let Some(pos) = entries.iter().position(|t| t.id == technology.id) {
            if *entries[pos] == *technology {
                return Ok(());
            }
            entries.remove(pos);
        }

        debug!(technology = technology.name(), zone = %zone, "Added technology");
        entries.push(technology);
        Ok(())
    }

    /// Removes the named technology from `zone`; returns false if it was not there
    pub fn remove(&mut self, zone: Zone, id: &TechnologyId) -> bool {
        let entries = self.zone_mut(zone);
        match entries.iter().position(|t| &t.id == id) {
            Some(pos) => {
                entries.remove(pos);
                debug!(technology = id.name(), zone = %zone, "Removed technology");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, zone: Zone, id: &TechnologyId) -> bool {
        self.zone(zone).iter().any(|t| &t.id == id)
    }

    /// Frontend entries followed by backend entries. A fullstack technology placed in
    /// both zones is reported twice.
    pub fn all_selected(&self) -> Vec<&Technology> {
        self.frontend
            .iter()
            .chain(self.backend.iter())
            .map(|t| t.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.frontend.len() + self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frontend.is_empty() && self.backend.is_empty()
    }

    pub fn clear(&mut self) {
        self.frontend.clear();
        self.backend.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::CompatibilityCatalog;

    fn tech(catalog: &CompatibilityCatalog, id: TechnologyId) -> Arc<Technology> {
        catalog.get(&id).unwrap().clone()
    }

    fn names(selection: &StackSelection, zone: Zone) -> Vec<&str> {
        selection.zone(zone).iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_add_matching_zone() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();

        assert!(selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::React18))
            .is_ok());
        assert!(selection
            .add(Zone::Backend, tech(&catalog, TechnologyId::Express))
            .is_ok());
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_add_wrong_zone_is_rejected() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();

        let result = selection.add(Zone::Frontend, tech(&catalog, TechnologyId::Express));
        assert_eq!(
            result,
            Err(PlacementError::WrongZone {
                technology: "Express".to_string(),
                category: Zone::Backend,
                zone: Zone::Frontend,
            })
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_fullstack_occupies_both_zones() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();
        let next = tech(&catalog, TechnologyId::NextJs14);

        selection.add(Zone::Frontend, next.clone()).unwrap();
        selection.add(Zone::Backend, next).unwrap();

        let all: Vec<&str> = selection.all_selected().iter().map(|t| t.name()).collect();
        assert_eq!(all, vec!["Next.js 14", "Next.js 14"]);
    }

    #[test]
    fn test_readd_identical_keeps_position() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();

        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::React18))
            .unwrap();
        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::Vite))
            .unwrap();
        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::React18))
            .unwrap();

        assert_eq!(names(&selection, Zone::Frontend), vec!["React 18", "Vite"]);
    }

    #[test]
    fn test_readd_changed_entry_replaces_and_appends() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();

        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::React18))
            .unwrap();
        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::Vite))
            .unwrap();

        let pinned =
            Technology::new(TechnologyId::React18, Zone::Frontend).with_package("react@18");
        selection.add(Zone::Frontend, Arc::new(pinned)).unwrap();

        assert_eq!(names(&selection, Zone::Frontend), vec!["Vite", "React 18"]);
        assert_eq!(
            selection.zone(Zone::Frontend)[1].package.as_deref(),
            Some("react@18")
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = StackSelection::new();
        assert!(!selection.remove(Zone::Backend, &TechnologyId::Express));
        assert!(!selection.remove(Zone::Backend, &TechnologyId::Express));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_add_then_remove_restores_selection() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();
        selection
            .add(Zone::Backend, tech(&catalog, TechnologyId::Express))
            .unwrap();
        let before = selection.clone();

        selection
            .add(Zone::Backend, tech(&catalog, TechnologyId::Prisma))
            .unwrap();
        assert!(selection.remove(Zone::Backend, &TechnologyId::Prisma));

        assert_eq!(selection, before);
    }

    #[test]
    fn test_remove_only_affects_named_zone() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();
        let ts = tech(&catalog, TechnologyId::TypeScript);
        selection.add(Zone::Frontend, ts.clone()).unwrap();
        selection.add(Zone::Backend, ts).unwrap();

        assert!(selection.remove(Zone::Frontend, &TechnologyId::TypeScript));
        assert!(!selection.contains(Zone::Frontend, &TechnologyId::TypeScript));
        assert!(selection.contains(Zone::Backend, &TechnologyId::TypeScript));
    }

    #[test]
    fn test_all_selected_orders_frontend_first() {
        let catalog = CompatibilityCatalog::with_defaults();
        let mut selection = StackSelection::new();
        selection
            .add(Zone::Backend, tech(&catalog, TechnologyId::Express))
            .unwrap();
        selection
            .add(Zone::Frontend, tech(&catalog, TechnologyId::React18))
            .unwrap();

        let all: Vec<&str> = selection.all_selected().iter().map(|t| t.name()).collect();
        assert_eq!(all, vec!["React 18", "Express"]);

        selection.clear();
        assert!(selection.all_selected().is_empty());
    }
}
