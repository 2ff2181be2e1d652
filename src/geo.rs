//! Location checks for photo geo-verification.
//!
//! Compares where a listing claims to be with where a photo of it was taken.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Outcome of comparing a claimed location with a photo's GPS position
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LocationVerification {
    pub distance_m: f64,
    pub tolerance_m: f64,
    pub verified: bool,
}

/// Parse `"lat, lng"` in decimal degrees
pub fn parse_coordinates(raw: &str) -> Result<Coordinates> {
    let (lat, lng) = raw
        .split_once(',')
        .context("Invalid coordinates format. Use: lat, lng")?;

    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude {:?}", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude {:?}", lng.trim()))?;

    if !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("Latitude {} out of range", lat);
    }
    if !(-180.0..=180.0).contains(&lng) {
        anyhow::bail!("Longitude {} out of range", lng);
    }

    Ok(Coordinates { lat, lng })
}

/// Convert EXIF degrees/minutes/seconds to signed decimal degrees
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: &str) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference.trim() {
        "S" | "W" | "s" | "w" => -decimal,
        _ => decimal,
    }
}

/// Great-circle distance in meters (haversine)
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn verify_location(claimed: Coordinates, photo: Coordinates, tolerance_m: f64) -> LocationVerification {
    let distance_m = haversine_distance(claimed, photo);
    LocationVerification {
        distance_m,
        tolerance_m,
        verified: distance_m <= tolerance_m,
    }
}
