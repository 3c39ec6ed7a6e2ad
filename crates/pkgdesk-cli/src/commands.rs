use std::collections::BTreeSet;

use anyhow::{Context, Result};
use indicatif::HumanCount;
use pkgdesk_core::{CatalogSnapshot, LatestCandidate, PackageId, PackageRow, RepositoriesInfo};
use pkgdesk_planner::{evaluate, ChangeRequest, InstalledSummary, SourceSummary};
use pkgdesk_session::ProjectSession;
use tracing::warn;

use crate::catalog::SnapshotBackend;
use crate::render::{render_status_line, render_version, OutputStyle};

pub(crate) async fn open_session(
    snapshot: CatalogSnapshot,
) -> Result<ProjectSession<SnapshotBackend>> {
    let backend = SnapshotBackend::new(snapshot);
    let project_path = backend.project_path().to_string();
    let session = ProjectSession::new(backend, project_path);
    session
        .refresh()
        .await
        .context("failed to load package rows")?;
    session
        .load_repositories_info()
        .await
        .context("failed to load repositories info")?;
    Ok(session)
}

/// Selects `packages` in order and returns the ids that were skipped because
/// the bulk mode set by earlier picks excludes them.
pub(crate) fn select_packages(
    session: &ProjectSession<SnapshotBackend>,
    packages: &[String],
) -> Result<Vec<String>> {
    let mut skipped = Vec::new();
    for package in packages {
        if session.is_selected(package) {
            continue;
        }
        if !session.toggle_selection(package)? {
            warn!(package = %package, "package skipped by bulk selection");
            skipped.push(package.clone());
        }
    }
    Ok(skipped)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RepositoryChanges {
    pub(crate) show: Vec<String>,
    pub(crate) hide: Vec<String>,
    pub(crate) prerelease: Option<bool>,
    pub(crate) hide_local: Option<bool>,
}

pub(crate) async fn apply_repository_changes(
    session: &ProjectSession<SnapshotBackend>,
    changes: &RepositoryChanges,
) -> Result<()> {
    for id in &changes.show {
        session.set_repository_shown(id, true).await?;
    }
    for id in &changes.hide {
        session.set_repository_shown(id, false).await?;
    }
    if let Some(shown) = changes.prerelease {
        session.set_show_prerelease_packages(shown).await?;
    }
    if let Some(hidden) = changes.hide_local {
        session.set_hide_local_user_packages(hidden).await?;
    }
    Ok(())
}

pub(crate) fn latest_label(candidate: &LatestCandidate, style: OutputStyle) -> String {
    match candidate {
        LatestCandidate::None => "-".to_string(),
        LatestCandidate::Contains { .. } => "up to date".to_string(),
        LatestCandidate::Upgradable {
            pkg,
            has_unity_incompatible_latest,
        } => {
            let version = render_version(style, &pkg.version_string());
            if *has_unity_incompatible_latest {
                format!("{version} (newer versions need another unity)")
            } else {
                version
            }
        }
    }
}

pub(crate) fn format_row_line(row: &PackageRow, style: OutputStyle) -> String {
    let capability = evaluate(row);
    let marker = if capability.has_any_update() { "*" } else { " " };
    format!(
        "{marker} {} installed={} latest={} source={}",
        row.id,
        InstalledSummary::for_row(row).label(),
        latest_label(&row.latest, style),
        SourceSummary::for_row(row).label(),
    )
}

pub(crate) fn format_row_lines(rows: &[PackageRow], style: OutputStyle) -> Vec<String> {
    if rows.is_empty() {
        return vec!["No packages listed for this project".to_string()];
    }
    rows.iter().map(|row| format_row_line(row, style)).collect()
}

pub(crate) fn format_search_results(
    visible: &BTreeSet<PackageId>,
    rows: &[PackageRow],
    query: &str,
    style: OutputStyle,
) -> Vec<String> {
    let lines = rows
        .iter()
        .filter(|row| visible.contains(&row.id))
        .map(|row| format_row_line(row, style))
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return vec![format!("No packages found matching '{query}'")];
    }
    lines
}

pub(crate) fn format_repository_lines(info: &RepositoriesInfo) -> Vec<String> {
    let mut lines = info
        .menu_repository_ids()
        .into_iter()
        .map(|id| {
            let mark = if info.is_repository_shown(id) { "x" } else { " " };
            format!("[{mark}] {id}")
        })
        .collect::<Vec<_>>();
    lines.push(format!(
        "show prerelease packages: {}",
        yes_no(info.show_prerelease_packages)
    ));
    lines.push(format!(
        "hide local user packages: {}",
        yes_no(info.hide_local_user_packages)
    ));
    lines
}

pub(crate) fn format_request_lines(
    request: Option<&ChangeRequest>,
    style: OutputStyle,
) -> Result<Vec<String>> {
    let Some(request) = request else {
        return Ok(vec![render_status_line(style, "ok", "nothing to change")]);
    };

    let count = request.package_count() as u64;
    let summary = match request {
        ChangeRequest::ReinstallAll { .. } => format!("planned {}", request.kind()),
        _ => format!(
            "planned {} for {} {}",
            request.kind(),
            HumanCount(count),
            if count == 1 { "package" } else { "packages" }
        ),
    };
    let body =
        serde_json::to_string_pretty(request).context("failed to encode change request")?;

    let mut lines = vec![render_status_line(style, "ok", &summary)];
    lines.extend(body.lines().map(str::to_string));
    Ok(lines)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
