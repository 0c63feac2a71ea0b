use metroboard::prelude::*;

fn repo() -> Repository {
    let dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    let data = RefData::new(Config::default()).load_dir(dir).unwrap();
    Repository::new().with_refdata(data)
}

#[test]
fn resolve_returns_stored_order() {
    let repo = repo();
    let stations = resolve(&repo, "line_5", "route1").unwrap();
    let names: Vec<&str> = stations.iter().map(|name| &**name).collect();
    assert_eq!(
        names,
        [
            "Alder Park",
            "Birch Gate",
            "Cedar Market",
            "Dockside",
            "Elm Street",
            "Foundry"
        ]
    );
}

#[test]
fn resolve_matches_both_legacy_name_fields() {
    let repo = repo();
    // route1 is named through `type`, route10 through `service_name`.
    assert!(resolve(&repo, "line_5", "route1").is_ok());
    let stations = resolve(&repo, "line_5", "route10").unwrap();
    assert_eq!(stations.len(), 4);
}

#[test]
fn unknown_line_is_not_found() {
    let repo = repo();
    let err = resolve(&repo, "line_9", "route1").unwrap_err();
    assert!(matches!(err, Error::LineNotFound(_)));
}

#[test]
fn unknown_service_is_not_found() {
    let repo = repo();
    let err = resolve(&repo, "line_5", "routeX").unwrap_err();
    assert!(matches!(err, Error::ServiceNotFound { .. }));
}

#[test]
fn empty_service_is_rejected() {
    let repo = repo();
    let err = resolve(&repo, "line_5", "ghost").unwrap_err();
    assert!(matches!(err, Error::EmptyService { .. }));
}

#[test]
fn services_are_listed_in_stored_order() {
    let repo = repo();
    let services = services_for_line(&repo, "line_5").unwrap();
    let names: Vec<&str> = services.iter().map(|name| &**name).collect();
    assert_eq!(names, ["route1", "route3", "route10", "expressA", "ghost"]);
}

#[test]
fn next_station_follows_stored_order() {
    let repo = repo();
    let next = next_station_after(&repo, "line_5", "route1", "Birch Gate").unwrap();
    assert_eq!(next.as_deref(), Some("Cedar Market"));

    let at_end = next_station_after(&repo, "line_5", "route1", "Foundry").unwrap();
    assert_eq!(at_end, None);

    let off_route = next_station_after(&repo, "line_5", "route1", "Nowhere").unwrap();
    assert_eq!(off_route, None);
}
