use metroboard::prelude::*;

fn repo() -> Repository {
    let dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    let data = RefData::new(Config::default()).load_dir(dir).unwrap();
    Repository::new().with_refdata(data)
}

fn station<'a>(views: &'a [StationView], name: &str) -> &'a StationView {
    views
        .iter()
        .find(|view| &*view.name == name)
        .unwrap_or_else(|| panic!("station {name} should be on the map"))
}

#[test]
fn single_line_station_is_not_transfer() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();
    let alder = station(&views, "Alder Park");
    assert!(!alder.is_transfer);
    assert!(alder.transfer_lines.is_empty());
    assert!(alder.badges.is_empty());
    assert_eq!(alder.index, Some(1));
}

#[test]
fn duplicate_codes_count_once() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();
    // Cedar Market lists line 5 twice, once padded and once not.
    let cedar = station(&views, "Cedar Market");
    assert!(!cedar.is_transfer);
    assert!(cedar.transfer_lines.is_empty());
    assert_eq!(cedar.index, Some(3));
}

#[test]
fn bare_number_codes_match_padded_strings() {
    let repo = repo();
    let views = line_map(&repo, "line_2", "loop1").unwrap();
    // North Cross is recorded as ["02", 2] and [2, 12].
    let north = station(&views, "North Cross");
    assert!(!north.is_transfer);
    assert_eq!(north.index, Some(2));
}

#[test]
fn transfer_lines_keep_first_seen_order() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();
    let foundry = station(&views, "Foundry");
    assert!(foundry.is_transfer);
    let codes: Vec<String> = foundry
        .transfer_lines
        .iter()
        .map(|code| code.to_string())
        .collect();
    assert_eq!(codes, ["S3", "2"]);
}

#[test]
fn alpha_codes_do_not_collapse_with_numeric() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();
    let dockside = station(&views, "Dockside");
    assert!(dockside.is_transfer);
    assert_eq!(dockside.transfer_lines, [LineCode::Alpha("S3".into())]);

    let views = line_map(&repo, "line_2", "loop1").unwrap();
    let east = station(&views, "East Cross");
    assert!(east.is_transfer);
    assert_eq!(east.transfer_lines, [LineCode::Numeric(3)]);
}

#[test]
fn badges_resolve_colors_through_fallbacks() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();

    let birch = station(&views, "Birch Gate");
    assert_eq!(birch.badges.len(), 1);
    assert_eq!(birch.badges[0].code, "2");
    assert_eq!(&*birch.badges[0].color, "#e4002b");

    // line_S3 has no color table entry; its route record color applies.
    let dockside = station(&views, "Dockside");
    assert_eq!(dockside.badges[0].code, "S3");
    assert_eq!(&*dockside.badges[0].color, "#008c95");

    // line_3 is unknown everywhere and gets the default.
    let views = line_map(&repo, "line_2", "loop1").unwrap();
    let east = station(&views, "East Cross");
    assert_eq!(east.badges[0].code, "3");
    assert_eq!(&*east.badges[0].color, DEFAULT_LINE_COLOR);
}

#[test]
fn translations_enrich_stations() {
    let repo = repo();
    let views = line_map(&repo, "line_5", "route1").unwrap();
    assert_eq!(&*station(&views, "Birch Gate").translated, "Porte du Bouleau");
    assert_eq!(&*station(&views, "Alder Park").translated, "Alder Park");
}

#[test]
fn missing_station_record_degrades() {
    let repo = repo();
    let views = line_map(&repo, "line_S3", "route1").unwrap();

    // Harbor Point is absent from the station table entirely.
    let harbor = station(&views, "Harbor Point");
    assert_eq!(harbor.index, None);
    assert!(!harbor.is_transfer);
    assert_eq!(&*harbor.translated, "Harbor Point");

    let foundry = station(&views, "Foundry");
    assert_eq!(foundry.index, Some(1));
    let codes: Vec<String> = foundry
        .transfer_lines
        .iter()
        .map(|code| code.to_string())
        .collect();
    assert_eq!(codes, ["5", "2"]);
}
