//! # Country Coordinate Table
//! Static lookup of a representative `(lat, lng)` per country for bubble
//! placement. This is a display anchor, not real geospatial math: one point
//! per country, and a neutral world-center fallback for anything unknown.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback anchor for countries missing from the table.
pub const DEFAULT_COORDS: (f64, f64) = (20.0, 0.0);

/// ISO 3166-1 alpha-2 (lowercase) -> representative centroid.
static COUNTRY_COORDS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        ("us", (39.8283, -98.5795)),
        ("gb", (55.3781, -3.436)),
        ("ca", (56.1304, -106.3468)),
        ("au", (-25.2744, 133.7751)),
        ("de", (51.1657, 10.4515)),
        ("fr", (46.2276, 2.2137)),
        ("it", (41.8719, 12.5674)),
        ("es", (40.4637, -3.7492)),
        ("jp", (36.2048, 138.2529)),
        ("cn", (35.8617, 104.1954)),
        ("in", (20.5937, 78.9629)),
        ("br", (-14.235, -51.9253)),
        ("ru", (61.524, 105.3188)),
        ("kr", (35.9078, 127.7669)),
        ("mx", (23.6345, -102.5528)),
        ("ar", (-38.4161, -63.6167)),
        ("za", (-30.5595, 22.9375)),
        ("ng", (9.082, 8.6753)),
        ("eg", (26.8206, 30.8025)),
        ("pl", (51.9194, 19.1451)),
        ("nl", (52.1326, 5.2913)),
        ("be", (50.5039, 4.4699)),
        ("ch", (46.8182, 8.2275)),
        ("at", (47.5162, 14.5501)),
        ("se", (60.1282, 18.6435)),
        ("no", (60.472, 8.4689)),
        ("fi", (61.9241, 25.7482)),
        ("ie", (53.1424, -7.6921)),
        ("pt", (39.3999, -8.2245)),
        ("gr", (39.0742, 21.8243)),
        ("tr", (38.9637, 35.2433)),
        ("il", (31.0461, 34.8516)),
        ("sa", (23.8859, 45.0792)),
        ("ae", (23.4241, 53.8478)),
        ("id", (-0.7893, 113.9213)),
        ("th", (15.87, 100.9925)),
        ("vn", (14.0583, 108.2772)),
        ("ph", (12.8797, 121.774)),
        ("my", (4.2105, 101.9758)),
        ("sg", (1.3521, 103.8198)),
        ("nz", (-40.9006, 174.886)),
    ])
});

/// Resolve coordinates for a country code. Case-insensitive; unknown or empty
/// codes map to [`DEFAULT_COORDS`]. Never fails.
pub fn coords_for(country: &str) -> (f64, f64) {
    let key = country.trim().to_ascii_lowercase();
    COUNTRY_COORDS
        .get(key.as_str())
        .copied()
        .unwrap_or(DEFAULT_COORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_resolves() {
        assert_eq!(coords_for("jp"), (36.2048, 138.2529));
        assert_eq!(coords_for("US"), (39.8283, -98.5795));
    }

    #[test]
    fn unknown_country_falls_back_to_world_center() {
        assert_eq!(coords_for("zz"), DEFAULT_COORDS);
        assert_eq!(coords_for(""), DEFAULT_COORDS);
        assert_eq!(coords_for("default"), DEFAULT_COORDS);
    }
}
