//! Geografische Grundtypen: Koordinatenpunkt und Bounding Box.

/// Geografischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

/// Achsenparallele Bounding Box in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke (min lat, min lng)
    pub south_west: GeoPoint,
    /// Nordost-Ecke (max lat, max lng)
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Bounding Box um genau einen Punkt.
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Berechnet die Bounding Box aller Punkte.
    ///
    /// `None` für eine leere Punktmenge – eine leere Box ist nicht definiert.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Erweitert die Box so, dass sie `point` enthält.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Vergrößert die Box auf jeder Seite um `ratio` ihrer Höhe bzw. Breite.
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_pad = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_pad = (self.north_east.lng - self.south_west.lng).abs() * ratio;
        Self {
            south_west: GeoPoint::new(self.south_west.lat - lat_pad, self.south_west.lng - lng_pad),
            north_east: GeoPoint::new(self.north_east.lat + lat_pad, self.north_east.lng + lng_pad),
        }
    }

    /// Nordwest-Ecke (oben links auf der Karte).
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.north_east.lat, self.south_west.lng)
    }

    /// Südost-Ecke (unten rechts auf der Karte).
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.south_west.lat, self.north_east.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_empty_is_none() {
        assert!(GeoBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn from_points_spans_all_points() {
        let bounds = GeoBounds::from_points([
            GeoPoint::new(45.07, 7.68),
            GeoPoint::new(45.11, 7.60),
            GeoPoint::new(45.02, 7.75),
        ])
        .expect("Punkte vorhanden");

        assert_relative_eq!(bounds.south_west.lat, 45.02);
        assert_relative_eq!(bounds.south_west.lng, 7.60);
        assert_relative_eq!(bounds.north_east.lat, 45.11);
        assert_relative_eq!(bounds.north_east.lng, 7.75);
    }

    #[test]
    fn pad_extends_each_side_by_ratio() {
        let bounds = GeoBounds {
            south_west: GeoPoint::new(45.0, 7.0),
            north_east: GeoPoint::new(46.0, 9.0),
        };

        let padded = bounds.pad(0.15);

        assert_relative_eq!(padded.south_west.lat, 44.85, epsilon = 1e-9);
        assert_relative_eq!(padded.north_east.lat, 46.15, epsilon = 1e-9);
        assert_relative_eq!(padded.south_west.lng, 6.7, epsilon = 1e-9);
        assert_relative_eq!(padded.north_east.lng, 9.3, epsilon = 1e-9);
    }

    #[test]
    fn pad_of_single_point_stays_degenerate() {
        let bounds = GeoBounds::from_point(GeoPoint::new(45.07, 7.68)).pad(0.15);
        assert_eq!(bounds.south_west, GeoPoint::new(45.07, 7.68));
        assert_eq!(bounds.south_west, bounds.north_east);
    }
}
