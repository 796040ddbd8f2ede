use serde::{Deserialize, Serialize};

/// One parking lot row retained from the delimited parking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Hourly cost field driving the price ramp.
    pub payex: f64,
    /// Free-space count. Only affects marker sizing, so a parse failure
    /// leaves it unset instead of dropping the row.
    pub available_cars: Option<f64>,
}

impl ParkingLot {
    /// Display name shown in marker popups.
    pub fn display_name(&self) -> String {
        format!("Park {}", self.id)
    }
}

/// Trip origin plus routed parking lots from the parking feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkingFeed {
    pub start_point: FeedPoint,
    #[serde(default)]
    pub parking_lots: Vec<LotRecord>,
}

/// Feed coordinate: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPoint {
    pub x: f64,
    pub y: f64,
}

impl FeedPoint {
    pub fn latlng(&self) -> [f64; 2] {
        [self.y, self.x]
    }
}

/// A parking option with an optional driving route from the route feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub name: String,
    /// Route duration string as exported by the route service.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "distanceMeters")]
    pub distance_meters: Option<f64>,
    #[serde(default)]
    pub polyline: Option<RoutePolyline>,
}

impl LotRecord {
    /// Route geometry as `[lat, lng]` pairs for map overlays.
    ///
    /// The feed stores GeoJSON `[lng, lat]` order; points with fewer than
    /// two coordinates are skipped.
    pub fn route_latlng(&self) -> Vec<[f64; 2]> {
        let polyline = match self.polyline.as_ref() {
            Some(polyline) => polyline,
            None => return Vec::new(),
        };
        polyline
            .geo_json_linestring
            .coordinates
            .iter()
            .filter_map(|point| match (point.first(), point.get(1)) {
                (Some(&lng), Some(&lat)) => Some([lat, lng]),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutePolyline {
    #[serde(rename = "geoJsonLinestring")]
    pub geo_json_linestring: GeoLineString,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoLineString {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parking_feed_reads_route_payload() {
        let json = r#"{
            "start_point": { "x": 121.555, "y": 25.032 },
            "parking_lots": [
                {
                    "x": 121.56,
                    "y": 25.04,
                    "name": "Lot 1",
                    "duration": "312s",
                    "distanceMeters": 1845.0,
                    "polyline": {
                        "geoJsonLinestring": {
                            "type": "LineString",
                            "coordinates": [[121.555, 25.032], [121.56, 25.04]]
                        }
                    }
                },
                { "x": 121.57, "y": 25.05, "name": "Lot 2" }
            ]
        }"#;
        let feed: ParkingFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.start_point.latlng(), [25.032, 121.555]);
        assert_eq!(feed.parking_lots.len(), 2);
        assert_eq!(feed.parking_lots[0].distance_meters, Some(1845.0));
        assert!(feed.parking_lots[1].polyline.is_none());
    }

    #[test]
    fn route_latlng_swaps_geojson_order() {
        let lot = LotRecord {
            polyline: Some(RoutePolyline {
                geo_json_linestring: GeoLineString {
                    coordinates: vec![vec![121.555, 25.032], vec![121.56], vec![121.57, 25.05]],
                },
            }),
            ..Default::default()
        };
        assert_eq!(lot.route_latlng(), vec![[25.032, 121.555], [25.05, 121.57]]);
    }

    #[test]
    fn route_latlng_without_polyline_is_empty() {
        assert!(LotRecord::default().route_latlng().is_empty());
    }

    #[test]
    fn display_name_prefixes_lot_id() {
        let lot = ParkingLot {
            id: "17".into(),
            lat: 25.0,
            lng: 121.5,
            payex: 3.5,
            available_cars: None,
        };
        assert_eq!(lot.display_name(), "Park 17");
    }
}
