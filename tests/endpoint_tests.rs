use metroboard::prelude::*;

fn repo() -> Repository {
    let dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    let data = RefData::new(Config::default()).load_dir(dir).unwrap();
    Repository::new().with_refdata(data)
}

#[test]
fn linear_forward_endpoints() {
    let repo = repo();
    let ends = endpoints(&repo, "line_5", "route1", Direction::Forward).unwrap();
    assert_eq!(ends.start_label(), "Alder Park");
    assert_eq!(ends.terminal_label(), "Foundry");
}

#[test]
fn linear_reversed_endpoints_swap() {
    let repo = repo();
    let ends = endpoints(&repo, "line_5", "route1", Direction::Reversed).unwrap();
    assert_eq!(ends.start_label(), "Foundry");
    assert_eq!(ends.terminal_label(), "Alder Park");
}

#[test]
fn loop_forward_runs_outer_ring() {
    let repo = repo();
    let ends = endpoints(&repo, "line_2", "loop1", Direction::Forward).unwrap();
    assert_eq!(ends.start_label(), "outer ring running");
    // loop1 declares no terminus; the supplementary marker stays empty.
    assert_eq!(ends.terminal_label(), "");
    assert!(matches!(
        ends,
        Endpoints::Ring {
            running: RingDirection::Outer,
            terminal: None
        }
    ));
}

#[test]
fn loop_reversed_runs_inner_ring() {
    let repo = repo();
    let ends = endpoints(&repo, "line_2", "loop1", Direction::Reversed).unwrap();
    assert_eq!(ends.start_label(), "inner ring running");
}

#[test]
fn declared_loop_terminus_ignores_direction() {
    let repo = repo();
    let forward = endpoints(&repo, "line_2", "loop2", Direction::Forward).unwrap();
    let reversed = endpoints(&repo, "line_2", "loop2", Direction::Reversed).unwrap();
    assert_eq!(forward.terminal_label(), "Union Ring");
    assert_eq!(reversed.terminal_label(), "Union Ring");
}

#[test]
fn unknown_pairs_surface_not_found() {
    let repo = repo();
    let err = endpoints(&repo, "line_9", "route1", Direction::Forward).unwrap_err();
    assert!(matches!(err, Error::LineNotFound(_)));

    let err = endpoints(&repo, "line_2", "routeX", Direction::Forward).unwrap_err();
    assert!(matches!(err, Error::ServiceNotFound { .. }));
}
