//! Externe Routenplaner-Links.

use super::geo::GeoPoint;

/// Endpunkt des externen Routenplaners.
pub const DIRECTIONS_ENDPOINT: &str = "https://www.google.com/maps/dir/";

/// Baut den Routen-Link zu einer Koordinate (`destination=lat,lng`, URL-kodiert).
pub fn directions_link(point: GeoPoint) -> String {
    let destination = format!("{},{}", point.lat, point.lng);
    match reqwest::Url::parse_with_params(
        DIRECTIONS_ENDPOINT,
        &[("api", "1"), ("destination", destination.as_str())],
    ) {
        Ok(url) => url.into(),
        Err(e) => {
            log::warn!("Routen-Link konnte nicht gebaut werden: {}", e);
            DIRECTIONS_ENDPOINT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_encodes_coordinate_pair() {
        let link = directions_link(GeoPoint::new(45.11, 7.78));
        assert_eq!(
            link,
            "https://www.google.com/maps/dir/?api=1&destination=45.11%2C7.78"
        );
    }

    #[test]
    fn link_is_deterministic_for_negative_coordinates() {
        let a = directions_link(GeoPoint::new(-33.8688, 151.2093));
        let b = directions_link(GeoPoint::new(-33.8688, 151.2093));
        assert_eq!(a, b);
        assert!(a.ends_with("destination=-33.8688%2C151.2093"));
    }
}
