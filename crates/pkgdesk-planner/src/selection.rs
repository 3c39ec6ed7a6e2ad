use pkgdesk_core::{PackageId, PackageRow};
use tracing::debug;

use crate::bulk::{aggregate, BulkAggregateCapability};
use crate::capability::{evaluate, PackageCapability};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    NonEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPackage {
    pub id: PackageId,
    pub capability: PackageCapability,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionSetController {
    selected: Vec<SelectedPackage>,
}

impl SelectionSetController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        if self.selected.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::NonEmpty
        }
    }

    pub fn add(&mut self, row: &PackageRow) -> bool {
        let capability = evaluate(row);
        if !capability.has_any_update() {
            debug!(package = %row.id, "skipping selection of package without any action");
            return false;
        }
        if self.contains(row.id.as_str()) {
            return false;
        }

        self.selected.push(SelectedPackage {
            id: row.id.clone(),
            capability,
        });
        debug!(package = %row.id, count = self.selected.len(), "package selected");
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|selected| selected.id.as_str() != id);
        let removed = self.selected.len() != before;
        if removed {
            debug!(package = id, count = self.selected.len(), "package deselected");
        }
        removed
    }

    pub fn toggle(&mut self, row: &PackageRow) -> bool {
        if self.contains(row.id.as_str()) {
            self.remove(row.id.as_str())
        } else {
            self.add(row)
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    // the rows behind the stored capabilities are gone or stale
    pub fn on_source_list_replaced(&mut self) {
        if !self.selected.is_empty() {
            debug!(
                dropped = self.selected.len(),
                "package list replaced, clearing selection"
            );
        }
        self.selected.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected.id.as_str() == id)
    }

    pub fn ids(&self) -> Vec<PackageId> {
        self.selected
            .iter()
            .map(|selected| selected.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn aggregate(&self) -> BulkAggregateCapability {
        aggregate(self.selected.iter().map(|selected| selected.capability))
    }
}
