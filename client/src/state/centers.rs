//! Medical centre finder: fixed centre list ranked by distance.
//!
//! DESIGN
//! ======
//! Centres are compiled in like the doctor roster. Entries without usable
//! coordinates are skipped at parse time, so everything downstream can
//! assume finite latitude/longitude. Distances are great-circle kilometres
//! from a reference point, which defaults to the Bhubaneswar city centre.

#[cfg(test)]
#[path = "centers_test.rs"]
mod centers_test;

use std::sync::LazyLock;

use serde::Deserialize;

/// Home page card the assistant's location reply points at.
pub const CARD_TITLE: &str = "Nearest Medi-Help Centre";

/// Bhubaneswar city centre.
pub const CITY_CENTRE: GeoPoint = GeoPoint { latitude: 20.2961, longitude: 85.8245 };

const EARTH_RADIUS_KM: f64 = 6371.0;

const CENTERS_JSON: &str = include_str!("../../data/centers.json");

static CENTERS: LazyLock<Vec<MedicalCenter>> = LazyLock::new(|| parse_centers(CENTERS_JSON).unwrap_or_default());

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One centre shown on the navigation page.
#[derive(Clone, Debug, PartialEq)]
pub struct MedicalCenter {
    pub name: String,
    pub center_type: String,
    pub location: GeoPoint,
}

#[derive(Deserialize)]
struct CenterRow {
    name: String,
    #[serde(default)]
    center_type: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl CenterRow {
    fn into_center(self) -> Option<MedicalCenter> {
        let latitude = self.latitude.filter(|v| v.is_finite())?;
        let longitude = self.longitude.filter(|v| v.is_finite())?;
        Some(MedicalCenter {
            name: self.name,
            center_type: self.center_type,
            location: GeoPoint { latitude, longitude },
        })
    }
}

/// Parse the centre list, dropping rows without coordinates.
///
/// # Errors
///
/// Returns the serde error message when the document is not a list of rows.
pub fn parse_centers(json: &str) -> Result<Vec<MedicalCenter>, String> {
    let rows: Vec<CenterRow> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    Ok(rows.into_iter().filter_map(CenterRow::into_center).collect())
}

/// The compiled-in centres, in dataset order.
#[must_use]
pub fn centers() -> &'static [MedicalCenter] {
    &CENTERS
}

/// Haversine distance between two points in kilometres.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// A centre paired with its distance from the reference point.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyCenter {
    pub center: MedicalCenter,
    pub km: f64,
}

/// Centres ordered nearest first. Equal distances keep dataset order.
#[must_use]
pub fn rank_by_distance(centers: &[MedicalCenter], origin: GeoPoint) -> Vec<NearbyCenter> {
    let mut ranked: Vec<NearbyCenter> = centers
        .iter()
        .map(|center| NearbyCenter { km: distance_km(origin, center.location), center: center.clone() })
        .collect();
    ranked.sort_by(|a, b| a.km.total_cmp(&b.km));
    ranked
}

/// Short human distance: metres below one kilometre, else one decimal km.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round())
    } else {
        format!("{km:.1} km")
    }
}

/// OpenStreetMap link centred on `point`.
#[must_use]
pub fn map_link(point: GeoPoint) -> String {
    let GeoPoint { latitude, longitude } = point;
    format!("https://www.openstreetmap.org/?mlat={latitude}&mlon={longitude}#map=16/{latitude}/{longitude}")
}
