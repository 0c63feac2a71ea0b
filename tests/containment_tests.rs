use metroboard::prelude::*;

fn repo() -> Repository {
    let dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    let data = RefData::new(Config::default()).load_dir(dir).unwrap();
    Repository::new().with_refdata(data)
}

#[test]
fn forward_block_is_detected() {
    let repo = repo();
    let container = containing_service(&repo, "line_5", "route10").unwrap();
    assert_eq!(container.as_deref(), Some("route1"));
}

#[test]
fn reversed_block_is_detected_and_longest_wins() {
    let repo = repo();
    // route3 runs Dockside..Birch Gate, the reverse of a route1 block; both
    // route1 and route10 contain it, route1 is longer.
    let container = containing_service(&repo, "line_5", "route3").unwrap();
    assert_eq!(container.as_deref(), Some("route1"));
}

#[test]
fn non_contiguous_is_not_contained() {
    let repo = repo();
    let container = containing_service(&repo, "line_5", "expressA").unwrap();
    assert_eq!(container, None);
}

#[test]
fn full_route_has_no_container() {
    let repo = repo();
    let container = containing_service(&repo, "line_5", "route1").unwrap();
    assert_eq!(container, None);
}

#[test]
fn view_substitutes_containing_route() {
    let repo = repo();
    let view = line_map_view(&repo, "line_5", "route10", Direction::Forward).unwrap();
    assert!(view.full_route_mode);
    assert_eq!(view.stations.len(), 6);
    assert_eq!(&*view.stations[0].name, "Alder Park");

    let active: Vec<&str> = view.active_stations.iter().map(|name| &**name).collect();
    assert_eq!(active, ["Birch Gate", "Cedar Market", "Dockside", "Elm Street"]);
}

#[test]
fn view_reverses_for_direction() {
    let repo = repo();
    let view = line_map_view(&repo, "line_5", "route1", Direction::Reversed).unwrap();
    assert!(view.reversed);
    assert!(!view.full_route_mode);
    assert_eq!(&*view.stations[0].name, "Foundry");
    assert_eq!(&*view.display_name, "No.5 Line");
    assert_eq!(&*view.color, "#7b2d8e");
}

#[test]
fn view_carries_loop_terminus_flags() {
    let repo = repo();
    let view = line_map_view(&repo, "line_2", "loop2", Direction::Forward).unwrap();
    assert!(view.is_loop);
    assert!(view.loop_has_terminal);
    assert_eq!(view.loop_terminal, "Union Ring");

    let view = line_map_view(&repo, "line_2", "loop1", Direction::Forward).unwrap();
    assert!(view.is_loop);
    assert!(!view.loop_has_terminal);
    assert_eq!(view.loop_terminal, "");
}
