use super::*;
use crate::state::assistant::Intent;

fn center(name: &str, latitude: f64, longitude: f64) -> MedicalCenter {
    MedicalCenter {
        name: name.to_owned(),
        center_type: "Clinic".to_owned(),
        location: GeoPoint { latitude, longitude },
    }
}

// =============================================================
// Dataset
// =============================================================

#[test]
fn compiled_centers_parse_with_coordinates() {
    let parsed = parse_centers(CENTERS_JSON).unwrap();
    assert_eq!(parsed.len(), 10);
    assert_eq!(centers(), parsed.as_slice());
    assert!(centers().iter().all(|c| c.location.latitude.is_finite() && c.location.longitude.is_finite()));
}

#[test]
fn rows_without_coordinates_are_skipped() {
    let json = r#"[
        { "name": "A", "center_type": "Hospital", "latitude": 20.1, "longitude": 85.1 },
        { "name": "B", "center_type": "Hospital", "latitude": null, "longitude": 85.2 },
        { "name": "C", "center_type": "Clinic", "longitude": 85.3 },
        { "name": "D", "latitude": 20.4, "longitude": 85.4 }
    ]"#;
    let parsed = parse_centers(json).unwrap();
    let names: Vec<&str> = parsed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["A", "D"]);
    assert_eq!(parsed[1].center_type, "");
}

#[test]
fn parse_centers_rejects_non_list() {
    assert!(parse_centers("{\"name\": \"A\"}").is_err());
}

// =============================================================
// Distance
// =============================================================

#[test]
fn distance_to_self_is_zero() {
    assert!(distance_km(CITY_CENTRE, CITY_CENTRE).abs() < 1e-9);
}

#[test]
fn one_degree_of_latitude_is_about_111_km() {
    let a = GeoPoint { latitude: 0.0, longitude: 0.0 };
    let b = GeoPoint { latitude: 1.0, longitude: 0.0 };
    let km = distance_km(a, b);
    assert!((km - 111.19).abs() < 0.01, "got {km}");
    assert!((distance_km(b, a) - km).abs() < 1e-9);
}

#[test]
fn ranking_is_nearest_first() {
    let ranked = rank_by_distance(centers(), CITY_CENTRE);
    assert_eq!(ranked.len(), centers().len());
    assert_eq!(ranked[0].center.name, "Apollo Hospitals Bhubaneswar");
    assert_eq!(ranked.last().unwrap().center.name, "AIIMS Bhubaneswar");
    assert!(ranked.windows(2).all(|w| w[0].km <= w[1].km));
}

#[test]
fn ranking_ties_keep_dataset_order() {
    let list = vec![center("far", 21.0, 85.8245), center("first", 20.3, 85.8245), center("second", 20.3, 85.8245)];
    let ranked = rank_by_distance(&list, CITY_CENTRE);
    let names: Vec<&str> = ranked.iter().map(|n| n.center.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "far"]);
}

#[test]
fn ranking_empty_list_is_empty() {
    assert!(rank_by_distance(&[], CITY_CENTRE).is_empty());
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn short_distances_are_in_metres() {
    assert_eq!(format_distance(0.85), "850 m");
    assert_eq!(format_distance(0.0), "0 m");
}

#[test]
fn longer_distances_are_in_kilometres() {
    assert_eq!(format_distance(1.0), "1.0 km");
    assert_eq!(format_distance(8.847), "8.8 km");
}

#[test]
fn map_link_points_at_the_centre() {
    let link = map_link(GeoPoint { latitude: 20.5, longitude: 85.25 });
    assert_eq!(link, "https://www.openstreetmap.org/?mlat=20.5&mlon=85.25#map=16/20.5/85.25");
}

#[test]
fn location_reply_names_the_home_page_card() {
    assert!(Intent::Location.reply().contains(CARD_TITLE));
}
