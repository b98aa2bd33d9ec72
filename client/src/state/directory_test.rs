use super::*;

fn record(name: &str, department: &str) -> DoctorRecord {
    DoctorRecord {
        name: name.to_owned(),
        department: department.to_owned(),
        qualification: "MBBS".to_owned(),
        address: "Bhubaneswar".to_owned(),
        photo_url: "https://example.test/cardiology.png".to_owned(),
    }
}

// =============================================================
// Roster
// =============================================================

#[test]
fn compiled_roster_parses_all_records() {
    let parsed = parse_roster(ROSTER_JSON).unwrap();
    assert_eq!(parsed.len(), 20);
    assert_eq!(roster(), parsed.as_slice());
    assert_eq!(roster()[0].name, "Dr. Rajesh Kumar Panda");
}

#[test]
fn parse_roster_rejects_malformed_json() {
    assert!(parse_roster("{\"name\": 1}").is_err());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn cardiology_query_is_trimmed_and_case_insensitive() {
    let visible = filter_doctors(roster(), "  CarDioLogy ");
    let expected: Vec<DoctorRecord> = roster()
        .iter()
        .filter(|d| d.department.to_lowercase().contains("cardiology"))
        .cloned()
        .collect();

    assert!(!visible.is_empty());
    assert_eq!(visible, expected);
}

#[test]
fn blank_query_returns_full_roster() {
    assert_eq!(filter_doctors(roster(), ""), roster());
    assert_eq!(filter_doctors(roster(), "   "), roster());
}

#[test]
fn query_matches_any_text_field_in_order() {
    let visible = filter_doctors(roster(), "kims hospital");
    let names: Vec<&str> = visible.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Dr. Sneha Mohanty", "Dr. Lipsa Pradhan"]);

    let by_qualification = filter_doctors(roster(), "mch");
    assert_eq!(by_qualification.len(), 1);
    assert_eq!(by_qualification[0].department, "Urology");
}

#[test]
fn photo_url_is_not_searched() {
    let records = vec![record("Dr. A", "Dermatology")];
    assert!(filter_doctors(&records, "example.test").is_empty());
}

#[test]
fn unmatched_query_yields_empty_view() {
    let mut view = DoctorViewState::new(roster());
    view.apply_query("veterinary", roster());

    assert!(view.is_empty());
    assert_eq!(view.query, "veterinary");
}

#[test]
fn reapplying_same_query_is_idempotent() {
    let mut view = DoctorViewState::new(roster());
    view.apply_query("general", roster());
    let first = view.clone();
    view.apply_query("general", roster());

    assert_eq!(view, first);
    assert_eq!(view.visible.len(), 2);
}

#[test]
fn new_view_shows_everything() {
    let records = vec![record("Dr. A", "ENT"), record("Dr. B", "Urology")];
    let view = DoctorViewState::new(&records);
    assert_eq!(view.visible, records);
    assert!(!view.is_empty());
}
