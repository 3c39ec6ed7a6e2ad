use std::collections::BTreeSet;

use pkgdesk_core::{
    InstalledPackage, LatestCandidate, Package, PackageId, PackageRow, PackageSource,
    VersionCandidates,
};
use semver::Version;

use super::*;

fn package(id: &str, version: &str) -> Package {
    Package {
        name: PackageId::from(id),
        display_name: None,
        version: Version::parse(version).expect("version must parse"),
        unity: Some((2022, 3)),
        is_yanked: false,
        source: PackageSource::Remote {
            id: "com.vrchat.repos.official".to_string(),
            display_name: "Official".to_string(),
        },
    }
}

fn contains(id: &str, version: &str) -> LatestCandidate {
    LatestCandidate::Contains {
        pkg: package(id, version),
    }
}

fn upgradable(id: &str, version: &str, incompatible: bool) -> LatestCandidate {
    LatestCandidate::Upgradable {
        pkg: package(id, version),
        has_unity_incompatible_latest: incompatible,
    }
}

fn row(id: &str) -> PackageRow {
    PackageRow::new(id, id)
}

fn installed_row(id: &str, version: &str) -> PackageRow {
    let mut row = row(id);
    row.installed = Some(InstalledPackage {
        version: Version::parse(version).expect("version must parse"),
        yanked: false,
    });
    row
}

fn with_latest(
    mut row: PackageRow,
    latest: LatestCandidate,
    stable: LatestCandidate,
) -> PackageRow {
    row.latest = latest;
    row.stable_latest = stable;
    row
}

fn capability(
    install: bool,
    reinstall: bool,
    stable: bool,
    latest_is_stable: bool,
) -> PackageCapability {
    PackageCapability {
        can_install_or_upgrade: install,
        can_reinstall_or_remove: reinstall,
        can_install_or_upgrade_stable: stable,
        latest_is_stable,
    }
}

fn ids(values: &[&str]) -> Vec<PackageId> {
    values.iter().map(|value| PackageId::from(*value)).collect()
}

#[test]
fn not_installed_row_with_upgradable_latest_can_install() {
    let row = with_latest(
        row("com.example.tool"),
        upgradable("com.example.tool", "2.0.0", false),
        upgradable("com.example.tool", "2.0.0", false),
    );

    let capability = evaluate(&row);
    assert!(capability.can_install_or_upgrade);
    assert!(!capability.can_reinstall_or_remove);
    assert!(capability.can_install_or_upgrade_stable);
    assert!(capability.latest_is_stable);
}

#[test]
fn current_installed_row_offers_no_install_action() {
    let row = with_latest(
        installed_row("com.example.tool", "1.0.0"),
        contains("com.example.tool", "1.0.0"),
        contains("com.example.tool", "1.0.0"),
    );

    let capability = evaluate(&row);
    assert!(!capability.can_install_or_upgrade);
    assert!(!capability.can_install_or_upgrade_stable);
    assert!(capability.can_reinstall_or_remove);
    assert!(capability.has_any_update());
}

#[test]
fn not_installed_row_treats_contains_as_installable() {
    let row = with_latest(
        row("com.example.tool"),
        contains("com.example.tool", "1.0.0"),
        LatestCandidate::None,
    );

    let capability = evaluate(&row);
    assert!(capability.can_install_or_upgrade);
    assert!(!capability.can_install_or_upgrade_stable);
}

#[test]
fn reinstall_or_remove_tracks_installed_state_for_every_candidate_combination() {
    let candidates = [
        LatestCandidate::None,
        contains("com.example.tool", "1.0.0"),
        upgradable("com.example.tool", "2.0.0-beta.1", true),
    ];

    for latest in &candidates {
        for stable in &candidates {
            let free = with_latest(row("com.example.tool"), latest.clone(), stable.clone());
            let owned = with_latest(
                installed_row("com.example.tool", "1.0.0"),
                latest.clone(),
                stable.clone(),
            );

            assert!(!evaluate(&free).can_reinstall_or_remove);
            assert!(evaluate(&owned).can_reinstall_or_remove);
            assert_eq!(evaluate(&free).can_install_or_upgrade, !latest.is_none());
            assert_eq!(
                evaluate(&owned).can_install_or_upgrade,
                latest.is_upgradable()
            );
        }
    }
}

#[test]
fn prerelease_latest_is_not_stable() {
    let row = with_latest(
        installed_row("com.example.tool", "1.0.0"),
        upgradable("com.example.tool", "1.1.0-beta.2", false),
        upgradable("com.example.tool", "1.0.1", false),
    );

    let capability = evaluate(&row);
    assert!(!capability.latest_is_stable);
    assert!(capability.can_install_or_upgrade_stable);
}

#[test]
fn row_without_latest_is_not_stable() {
    assert!(!evaluate(&row("com.example.tool")).latest_is_stable);
    assert!(!evaluate(&row("com.example.tool")).has_any_update());
}

#[test]
fn empty_aggregate_is_fold_identity_without_selection() {
    let aggregate = aggregate(Vec::new());
    assert!(!aggregate.has_selection);
    assert!(aggregate.can_install_or_upgrade);
    assert!(aggregate.can_reinstall_or_remove);
    assert!(aggregate.can_install_or_upgrade_stable);
    assert_eq!(aggregate, BulkAggregateCapability::default());
}

#[test]
fn aggregate_is_invariant_under_duplication() {
    let capabilities = vec![
        capability(true, false, true, false),
        capability(true, true, false, true),
        capability(false, true, true, true),
    ];
    let doubled = capabilities
        .iter()
        .chain(capabilities.iter())
        .copied()
        .collect::<Vec<_>>();
    let reversed = capabilities.iter().rev().copied().collect::<Vec<_>>();

    assert_eq!(aggregate(capabilities.clone()), aggregate(doubled));
    assert_eq!(aggregate(capabilities), aggregate(reversed));
}

#[test]
fn all_stable_latest_suppresses_stable_bulk_action() {
    let aggregate = aggregate(vec![
        capability(true, true, true, true),
        capability(true, false, true, true),
    ]);

    assert!(aggregate.has_selection);
    assert!(aggregate.can_install_or_upgrade);
    assert!(!aggregate.can_install_or_upgrade_stable);
}

#[test]
fn mixed_stability_keeps_stable_bulk_action() {
    let aggregate = aggregate(vec![
        capability(true, true, true, false),
        capability(false, true, true, true),
    ]);

    assert!(aggregate.can_install_or_upgrade_stable);
    assert!(!aggregate.can_install_or_upgrade);
    assert!(aggregate.can_reinstall_or_remove);
}

#[test]
fn aggregate_rows_matches_folding_evaluated_capabilities() {
    let rows = vec![
        with_latest(
            installed_row("com.example.a", "1.0.0"),
            upgradable("com.example.a", "2.0.0-rc.1", false),
            upgradable("com.example.a", "1.5.0", false),
        ),
        with_latest(
            row("com.example.b"),
            upgradable("com.example.b", "1.0.0", false),
            upgradable("com.example.b", "1.0.0", false),
        ),
    ];

    let folded = aggregate(rows.iter().map(evaluate));
    assert_eq!(aggregate_rows(&rows), folded);
    assert!(folded.can_install_or_upgrade);
    assert!(folded.can_install_or_upgrade_stable);
    assert!(!folded.can_reinstall_or_remove);
}

#[test]
fn eligibility_requires_a_shared_action() {
    let install_only = aggregate(vec![capability(true, false, false, true)]);
    let remove_only = capability(false, true, false, true);
    let upgradable = capability(true, true, false, true);

    assert!(!is_eligible(&install_only, &remove_only));
    assert!(is_eligible(&install_only, &upgradable));
    assert!(is_eligible(&BulkAggregateCapability::default(), &remove_only));
    assert!(!is_eligible(
        &BulkAggregateCapability::default(),
        &capability(false, false, false, false)
    ));
}

#[test]
fn selection_add_ignores_rows_without_actions() {
    let mut selection = SelectionSetController::new();
    assert!(!selection.add(&row("com.example.empty")));
    assert_eq!(selection.state(), SelectionState::Empty);
    assert!(selection.is_empty());
}

#[test]
fn selection_keeps_insertion_order_and_unique_ids() {
    let first = installed_row("com.example.b", "1.0.0");
    let second = installed_row("com.example.a", "1.0.0");
    let mut selection = SelectionSetController::new();

    assert!(selection.add(&first));
    assert!(selection.add(&second));
    assert!(!selection.add(&first));

    assert_eq!(selection.state(), SelectionState::NonEmpty);
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.ids(), ids(&["com.example.b", "com.example.a"]));
}

#[test]
fn selection_remove_returns_to_empty() {
    let tool = installed_row("com.example.tool", "1.0.0");
    let mut selection = SelectionSetController::new();
    selection.add(&tool);

    assert!(!selection.remove("com.example.other"));
    assert!(selection.remove("com.example.tool"));
    assert_eq!(selection.state(), SelectionState::Empty);
}

#[test]
fn selection_toggle_flips_membership() {
    let tool = installed_row("com.example.tool", "1.0.0");
    let mut selection = SelectionSetController::new();

    assert!(selection.toggle(&tool));
    assert!(selection.contains("com.example.tool"));
    assert!(selection.toggle(&tool));
    assert!(!selection.contains("com.example.tool"));
}

#[test]
fn source_list_replacement_always_resets_selection() {
    let mut selection = SelectionSetController::new();
    selection.on_source_list_replaced();
    assert_eq!(selection.state(), SelectionState::Empty);

    selection.add(&installed_row("com.example.a", "1.0.0"));
    selection.add(&installed_row("com.example.b", "1.0.0"));
    selection.on_source_list_replaced();
    assert_eq!(selection.state(), SelectionState::Empty);
    assert_eq!(selection.aggregate(), BulkAggregateCapability::default());
}

#[test]
fn selection_aggregate_uses_stored_capabilities() {
    let prerelease = with_latest(
        installed_row("com.example.a", "1.0.0"),
        upgradable("com.example.a", "2.0.0-beta.1", false),
        upgradable("com.example.a", "1.2.0", false),
    );
    let stable = with_latest(
        installed_row("com.example.b", "1.0.0"),
        upgradable("com.example.b", "1.1.0", false),
        upgradable("com.example.b", "1.1.0", false),
    );
    let mut selection = SelectionSetController::new();
    selection.add(&prerelease);
    selection.add(&stable);

    let aggregate = selection.aggregate();
    assert!(aggregate.has_selection);
    assert!(aggregate.can_install_or_upgrade);
    assert!(aggregate.can_install_or_upgrade_stable);
    assert!(aggregate.can_reinstall_or_remove);
}

#[test]
fn install_request_carries_package_and_flag() {
    let builder = RequestBuilder::new("/projects/world");
    let pkg = package("com.example.tool", "1.0.0");

    let request = builder.install(&pkg, Some(true));
    assert_eq!(
        request,
        ChangeRequest::Install {
            project_path: "/projects/world".to_string(),
            pkg,
            has_unity_incompatible_latest: Some(true),
        }
    );
    assert_eq!(request.kind(), "install");
    assert_eq!(request.project_path(), "/projects/world");
}

#[test]
fn install_latest_requires_a_candidate() {
    let builder = RequestBuilder::new("/projects/world");
    assert!(builder.install_latest(&row("com.example.tool")).is_none());

    let row = with_latest(
        row("com.example.tool"),
        upgradable("com.example.tool", "1.0.0", true),
        LatestCandidate::None,
    );
    let request = builder.install_latest(&row).expect("latest must be installable");
    match request {
        ChangeRequest::Install {
            pkg,
            has_unity_incompatible_latest,
            ..
        } => {
            assert_eq!(pkg.version_string(), "1.0.0");
            assert_eq!(has_unity_incompatible_latest, Some(true));
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn install_version_prefers_compatible_and_skips_installed() {
    let builder = RequestBuilder::new("/projects/world");
    let mut row = installed_row("com.example.tool", "1.0.0");
    row.unity_compatible = VersionCandidates::new(vec![
        package("com.example.tool", "1.1.0"),
        package("com.example.tool", "1.0.0"),
    ]);
    let mut legacy = package("com.example.tool", "0.9.0");
    legacy.unity = Some((2019, 4));
    row.unity_incompatible = VersionCandidates::new(vec![legacy]);

    assert!(builder.install_version(&row, "1.0.0").is_none());
    assert!(builder.install_version(&row, "3.0.0").is_none());

    let request = builder
        .install_version(&row, "0.9.0")
        .expect("incompatible versions are still selectable");
    match request {
        ChangeRequest::Install {
            pkg,
            has_unity_incompatible_latest,
            ..
        } => {
            assert_eq!(pkg.unity, Some((2019, 4)));
            assert_eq!(has_unity_incompatible_latest, None);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn upgrade_all_collects_upgradable_rows_and_unions_flag() {
    let rows = vec![
        with_latest(
            installed_row("com.example.a", "1.0.0"),
            upgradable("com.example.a", "2.0.0-beta.1", true),
            upgradable("com.example.a", "1.1.0", false),
        ),
        with_latest(
            installed_row("com.example.b", "1.0.0"),
            contains("com.example.b", "1.0.0"),
            contains("com.example.b", "1.0.0"),
        ),
        with_latest(
            row("com.example.c"),
            upgradable("com.example.c", "3.0.0", false),
            upgradable("com.example.c", "3.0.0", false),
        ),
    ];
    let builder = RequestBuilder::new("/projects/world");

    match builder.upgrade_all(&rows, Stability::Latest) {
        ChangeRequest::UpgradeAll {
            packages,
            has_unity_incompatible_latest,
            ..
        } => {
            let versions = packages
                .iter()
                .map(Package::version_string)
                .collect::<Vec<_>>();
            assert_eq!(versions, vec!["2.0.0-beta.1", "3.0.0"]);
            assert!(has_unity_incompatible_latest);
        }
        other => panic!("unexpected request: {other:?}"),
    }

    match builder.upgrade_all(&rows, Stability::Stable) {
        ChangeRequest::UpgradeAll {
            packages,
            has_unity_incompatible_latest,
            ..
        } => {
            assert_eq!(packages.len(), 2);
            assert_eq!(packages[0].version_string(), "1.1.0");
            assert!(!has_unity_incompatible_latest);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn upgrade_all_succeeds_without_matches() {
    let builder = RequestBuilder::new("/projects/world");
    let request = builder.upgrade_all(&[row("com.example.a")], Stability::Latest);
    assert_eq!(request.package_count(), 0);
}

#[test]
fn bulk_install_accepts_contains_and_upgradable() {
    let rows = vec![
        with_latest(
            row("com.example.a"),
            contains("com.example.a", "1.0.0"),
            contains("com.example.a", "1.0.0"),
        ),
        with_latest(
            installed_row("com.example.b", "1.0.0"),
            upgradable("com.example.b", "1.2.0", true),
            upgradable("com.example.b", "1.2.0", true),
        ),
        with_latest(
            row("com.example.c"),
            upgradable("com.example.c", "4.0.0", false),
            LatestCandidate::None,
        ),
    ];
    let builder = RequestBuilder::new("/projects/world");

    let request = builder
        .bulk_install_or_upgrade(
            &ids(&["com.example.b", "com.example.a"]),
            &rows,
            Stability::Latest,
        )
        .expect("selection must be installable");
    match request {
        ChangeRequest::BulkInstall {
            packages,
            has_unity_incompatible_latest,
            ..
        } => {
            let names = packages
                .iter()
                .map(|pkg| pkg.name.to_string())
                .collect::<Vec<_>>();
            assert_eq!(names, vec!["com.example.a", "com.example.b"]);
            assert!(has_unity_incompatible_latest);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn bulk_install_fails_when_selected_candidate_is_none() {
    let rows = vec![
        with_latest(
            installed_row("com.example.a", "1.0.0"),
            upgradable("com.example.a", "1.1.0", false),
            upgradable("com.example.a", "1.1.0", false),
        ),
        with_latest(
            row("com.example.c"),
            upgradable("com.example.c", "4.0.0-beta.1", false),
            LatestCandidate::None,
        ),
    ];
    let builder = RequestBuilder::new("/projects/world");

    let err = builder
        .bulk_install_or_upgrade(
            &ids(&["com.example.a", "com.example.c"]),
            &rows,
            Stability::Stable,
        )
        .expect_err("none candidate must be rejected");
    assert_eq!(
        err.package_id().map(PackageId::as_str),
        Some("com.example.c")
    );
    assert!(err.to_string().contains("stable latest"));

    let mut none_latest = rows.clone();
    none_latest[1].latest = LatestCandidate::None;
    let err = builder
        .bulk_install_or_upgrade(&ids(&["com.example.c"]), &none_latest, Stability::Latest)
        .expect_err("none candidate must be rejected");
    assert!(matches!(err, PlanError::InvalidSelection { .. }));
}

#[test]
fn bulk_install_fails_for_ids_missing_from_rows() {
    let rows = vec![with_latest(
        row("com.example.a"),
        upgradable("com.example.a", "1.0.0", false),
        upgradable("com.example.a", "1.0.0", false),
    )];
    let builder = RequestBuilder::new("/projects/world");

    let err = builder
        .bulk_install_or_upgrade(
            &ids(&["com.example.a", "com.example.gone"]),
            &rows,
            Stability::Latest,
        )
        .expect_err("stale selection must be rejected");
    assert_eq!(
        err.package_id().map(PackageId::as_str),
        Some("com.example.gone")
    );
    assert!(err.to_string().contains("no longer listed"));
}

#[test]
fn bulk_reinstall_remove_and_single_remove_payloads() {
    let builder = RequestBuilder::new("/projects/world");
    let selection = ids(&["com.example.b", "com.example.a"]);

    assert_eq!(
        builder.bulk_reinstall(&selection),
        ChangeRequest::BulkReinstall {
            project_path: "/projects/world".to_string(),
            package_ids: selection.clone(),
        }
    );
    assert_eq!(
        builder.bulk_remove(&selection),
        ChangeRequest::BulkRemove {
            project_path: "/projects/world".to_string(),
            package_ids: selection,
        }
    );

    let mut tool = installed_row("com.example.tool", "1.0.0");
    tool.display_name = "Example Tool".to_string();
    assert_eq!(
        builder.remove(&tool),
        ChangeRequest::Remove {
            project_path: "/projects/world".to_string(),
            package_id: PackageId::from("com.example.tool"),
            display_name: "Example Tool".to_string(),
        }
    );
    assert_eq!(builder.reinstall_all().kind(), "reinstall-all");
}

#[test]
fn change_request_serializes_with_camel_case_tag() {
    let builder = RequestBuilder::new("/projects/world");
    let value = serde_json::to_value(builder.bulk_remove(&ids(&["com.example.a"])))
        .expect("request must serialize");

    assert_eq!(value["type"], "bulkRemove");
    assert_eq!(value["projectPath"], "/projects/world");
    assert_eq!(value["packageIds"][0], "com.example.a");
}

fn searchable_rows() -> Vec<PackageRow> {
    let mut newtonsoft = row("com.unity.nuget.newtonsoft-json");
    newtonsoft.display_name = "com.unity.nuget.newtonsoft-json".to_string();

    let mut json_net = row("com.example.serializer");
    json_net.display_name = "Serializer".to_string();
    json_net.aliases = BTreeSet::from(["Json.NET".to_string()]);

    let mut avatars = row("com.vrchat.avatars");
    avatars.display_name = "VRChat SDK - Avatars".to_string();

    vec![newtonsoft, json_net, avatars]
}

#[test]
fn filter_matches_display_name_id_and_aliases_case_insensitively() {
    let rows = searchable_rows();

    let matched = filter(&rows, "JSON");
    assert_eq!(
        matched,
        BTreeSet::from([
            PackageId::from("com.example.serializer"),
            PackageId::from("com.unity.nuget.newtonsoft-json"),
        ])
    );

    let matched = filter(&rows, "sdk - ava");
    assert_eq!(matched, BTreeSet::from([PackageId::from("com.vrchat.avatars")]));
    assert!(filter(&rows, "missing").is_empty());
}

#[test]
fn empty_filter_matches_every_row() {
    let rows = searchable_rows();
    assert_eq!(filter(&rows, "").len(), rows.len());
}

#[test]
fn filter_index_keeps_query_across_refresh() {
    let rows = searchable_rows();
    let mut index = FilterIndex::new(&rows);
    assert_eq!(index.visible().len(), 3);

    index.set_query(&rows, "json");
    assert_eq!(index.query(), "json");
    assert!(index.is_visible("com.example.serializer"));
    assert!(!index.is_visible("com.vrchat.avatars"));

    let refreshed = rows[2..].to_vec();
    index.refresh(&refreshed);
    assert!(index.visible().is_empty());
}

#[test]
fn upgrade_all_stable_offered_only_with_prerelease_upgrade() {
    let stable_only = vec![with_latest(
        installed_row("com.example.a", "1.0.0"),
        upgradable("com.example.a", "1.1.0", false),
        upgradable("com.example.a", "1.1.0", false),
    )];
    let availability = UpgradeAllAvailability::from_rows(&stable_only);
    assert!(availability.upgradable_to_latest);
    assert!(!availability.upgradable_to_stable);

    let mut with_prerelease = stable_only.clone();
    with_prerelease.push(with_latest(
        installed_row("com.example.b", "1.0.0"),
        upgradable("com.example.b", "2.0.0-beta.1", false),
        contains("com.example.b", "1.0.0"),
    ));
    let availability = UpgradeAllAvailability::from_rows(&with_prerelease);
    assert!(availability.upgradable_to_stable);
    assert!(availability.permits(Stability::Latest));
    assert!(availability.permits(Stability::Stable));

    assert_eq!(
        UpgradeAllAvailability::from_rows(&[]),
        UpgradeAllAvailability::default()
    );
    assert!(!UpgradeAllAvailability::default().permits(Stability::Latest));
}

#[test]
fn source_summary_distinguishes_missing_and_unselected_sources() {
    let mut row = row("com.example.tool");
    assert_eq!(SourceSummary::for_row(&row), SourceSummary::None);

    row.is_there_source = true;
    assert_eq!(SourceSummary::for_row(&row), SourceSummary::NotSelected);

    row.sources.insert("com.example.repo".to_string());
    assert_eq!(
        SourceSummary::for_row(&row),
        SourceSummary::Single("com.example.repo".to_string())
    );

    row.sources.insert("com.example.alt".to_string());
    let summary = SourceSummary::for_row(&row);
    assert_eq!(summary.label(), "com.example.alt, com.example.repo");
}

#[test]
fn installed_summary_marks_yanked_versions() {
    let mut row = installed_row("com.example.tool", "1.0.0");
    assert_eq!(InstalledSummary::for_row(&row).label(), "1.0.0");

    if let Some(installed) = row.installed.as_mut() {
        installed.yanked = true;
    }
    assert_eq!(InstalledSummary::for_row(&row).label(), "1.0.0 (yanked)");
    assert_eq!(
        InstalledSummary::for_row(&self::row("com.example.other")),
        InstalledSummary::NotInstalled
    );
}

#[test]
fn version_choices_list_compatible_before_incompatible() {
    let mut row = installed_row("com.example.tool", "1.0.0");
    row.unity_compatible = VersionCandidates::new(vec![
        package("com.example.tool", "1.1.0"),
        package("com.example.tool", "1.0.0"),
    ]);
    row.unity_incompatible = VersionCandidates::new(vec![package("com.example.tool", "0.1.0")]);

    let choices = VersionChoices::for_row(&row);
    assert_eq!(choices.compatible, vec!["1.1.0", "1.0.0"]);
    assert_eq!(choices.incompatible, vec!["0.1.0"]);
    assert_eq!(choices.selected, "1.0.0");
    assert_eq!(choices.latest_compatible(), Some("1.1.0"));
}

#[test]
fn install_latest_button_needs_compatible_version() {
    let mut row = with_latest(
        row("com.example.tool"),
        upgradable("com.example.tool", "1.0.0", true),
        upgradable("com.example.tool", "1.0.0", true),
    );
    assert!(!can_install_latest(&row));

    row.unity_compatible = VersionCandidates::new(vec![package("com.example.tool", "1.0.0")]);
    assert!(can_install_latest(&row));
}

#[test]
fn bulk_mode_permits_only_available_actions() {
    let aggregate = aggregate(vec![
        capability(true, true, true, false),
        capability(true, false, false, true),
    ]);

    assert_eq!(
        aggregate.available_actions(),
        vec![BulkAction::InstallOrUpgrade(Stability::Latest)]
    );
    assert!(!aggregate.permits(BulkAction::Remove));
    assert!(BulkAggregateCapability::default()
        .available_actions()
        .is_empty());

    let err = PlanError::UnavailableBulkAction {
        action: BulkAction::Remove,
    };
    assert!(err.package_id().is_none());
    assert!(err.to_string().contains("uninstall selected"));
}

#[test]
fn install_latest_skips_installed_row_already_at_latest() {
    let builder = RequestBuilder::new("/projects/world");
    let current = with_latest(
        installed_row("com.example.tool", "1.0.0"),
        contains("com.example.tool", "1.0.0"),
        contains("com.example.tool", "1.0.0"),
    );
    assert!(builder.install_latest(&current).is_none());

    let not_installed = with_latest(
        row("com.example.tool"),
        contains("com.example.tool", "1.0.0"),
        contains("com.example.tool", "1.0.0"),
    );
    let request = builder
        .install_latest(&not_installed)
        .expect("uninstalled row must install its latest");
    assert_eq!(request.kind(), "install");
}

#[test]
fn unavailable_upgrade_all_names_the_stability() {
    let err = PlanError::UnavailableUpgradeAll {
        stability: Stability::Stable,
    };
    assert_eq!(err.package_id(), None);
    assert_eq!(
        err.to_string(),
        "upgrade all to stable latest is not available: no package would change"
    );
}
