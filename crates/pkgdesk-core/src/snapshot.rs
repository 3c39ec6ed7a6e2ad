use std::collections::HashSet;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use crate::repositories::RepositoriesInfo;
use crate::row::PackageRow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub project_path: String,
    #[serde(default)]
    pub repositories: RepositoriesInfo,
    #[serde(default)]
    pub rows: Vec<PackageRow>,
}

impl CatalogSnapshot {
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let snapshot: Self = toml::from_str(input).context("failed to parse catalog snapshot")?;

        if snapshot.project_path.trim().is_empty() {
            return Err(anyhow!("catalog snapshot project_path must not be empty"));
        }

        let mut seen_ids = HashSet::new();
        for row in &snapshot.rows {
            row.validate()
                .with_context(|| format!("invalid package row '{}'", row.id))?;
            if !seen_ids.insert(row.id.clone()) {
                return Err(anyhow!("duplicate package row '{}'", row.id));
            }
        }

        Ok(snapshot)
    }
}
