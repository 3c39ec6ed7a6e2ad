use std::collections::BTreeSet;

use pkgdesk_core::{PackageId, PackageRow};

pub fn filter(rows: &[PackageRow], query: &str) -> BTreeSet<PackageId> {
    if query.is_empty() {
        return rows.iter().map(|row| row.id.clone()).collect();
    }

    let query = query.to_ascii_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, &query))
        .map(|row| row.id.clone())
        .collect()
}

// `query` is already lower-cased
fn row_matches(row: &PackageRow, query: &str) -> bool {
    contains_ignore_case(&row.display_name, query)
        || contains_ignore_case(row.id.as_str(), query)
        || row
            .aliases
            .iter()
            .any(|alias| contains_ignore_case(alias, query))
}

fn contains_ignore_case(haystack: &str, lowered_query: &str) -> bool {
    haystack.to_ascii_lowercase().contains(lowered_query)
}

#[derive(Debug, Clone, Default)]
pub struct FilterIndex {
    query: String,
    visible: BTreeSet<PackageId>,
}

impl FilterIndex {
    pub fn new(rows: &[PackageRow]) -> Self {
        Self {
            query: String::new(),
            visible: filter(rows, ""),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, rows: &[PackageRow], query: &str) {
        self.query = query.to_string();
        self.visible = filter(rows, query);
    }

    // keeps the current query against a replaced row list
    pub fn refresh(&mut self, rows: &[PackageRow]) {
        self.visible = filter(rows, &self.query);
    }

    pub fn visible(&self) -> &BTreeSet<PackageId> {
        &self.visible
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }
}
