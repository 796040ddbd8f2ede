use parkcore::ingest::parse_parking_csv;
use parkcore::numeric::round_to;
use parkcore::records::{DayAggregate, LocationRecord, ParkingFeed, ParkingLot};
use parkcore::telemetry::{SourceLog, SourceMetrics};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// One loaded snapshot of the four static data assets. Each view derives
/// its charts from this snapshot; nothing is shared or mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct SiteAssets {
    pub week: Vec<DayAggregate>,
    pub locations: Vec<LocationRecord>,
    /// `None` until the parking feed loads, distinct from a loaded feed
    /// with no lots.
    pub feed: Option<ParkingFeed>,
    pub lots: Vec<ParkingLot>,
}

/// Reads every data source once, degrading each failure to an empty
/// dataset. The sources are causally unrelated, so one bad file never
/// blocks the others; the worst case is a blank chart or map.
pub fn load_assets(data_dir: &Path) -> SiteAssets {
    let log = SourceLog::new();
    let metrics = SourceMetrics::new();

    let week: Vec<DayAggregate> = match load_json::<Vec<DayAggregate>>(data_dir, "traffic_all.json", &log, &metrics) {
        Some(week) => {
            metrics.record_loaded();
            log.loaded("traffic_all.json", week.len());
            week
        }
        None => Vec::new(),
    };

    let mut locations: Vec<LocationRecord> =
        match load_json::<Vec<LocationRecord>>(data_dir, "traffic.json", &log, &metrics) {
            Some(locations) => {
                metrics.record_loaded();
                log.loaded("traffic.json", locations.len());
                locations
            }
            None => Vec::new(),
        };
    // Station coordinates are coerced once here so every view sees the
    // same 3-decimal keys.
    for loc in &mut locations {
        loc.location = [round_to(loc.location[0], 3), round_to(loc.location[1], 3)];
    }

    let feed: Option<ParkingFeed> = load_json(data_dir, "parking.json", &log, &metrics);
    if let Some(feed) = &feed {
        metrics.record_loaded();
        log.loaded("parking.json", feed.parking_lots.len());
    }

    let lots = match load_text(data_dir, "parking_data.csv", &log, &metrics) {
        Some(text) => {
            let lots = parse_parking_csv(&text);
            metrics.record_loaded();
            log.loaded("parking_data.csv", lots.len());
            lots
        }
        None => Vec::new(),
    };

    let (loaded, degraded) = metrics.snapshot();
    log.summary(loaded, degraded);

    SiteAssets {
        week,
        locations,
        feed,
        lots,
    }
}

fn load_json<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
    log: &SourceLog,
    metrics: &SourceMetrics,
) -> Option<T> {
    let text = load_text(dir, name, log, metrics)?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            metrics.record_degraded();
            log.degraded(name, &err);
            None
        }
    }
}

fn load_text(dir: &Path, name: &str, log: &SourceLog, metrics: &SourceMetrics) -> Option<String> {
    match fs::read_to_string(dir.join(name)) {
        Ok(text) => Some(text),
        Err(err) => {
            metrics.record_degraded();
            log.degraded(name, &err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn loads_all_four_sources() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "traffic_all.json",
            r#"[{"mean_x": [0.0], "mean_y": [50.0], "ci_upper": [60.0], "ci_lower": [40.0]}]"#,
        );
        write(
            &dir,
            "traffic.json",
            r#"[{"section_id": "Xinyi Rd", "location": [25.03195, 121.56548],
                 "weekday": {}, "weekend": {}}]"#,
        );
        write(
            &dir,
            "parking.json",
            r#"{"start_point": {"x": 121.555, "y": 25.032}, "parking_lots": []}"#,
        );
        write(
            &dir,
            "parking_data.csv",
            "1,x,x,x,121.5,25.0,x,x,x,3.5,x,150\nbad,row\n",
        );

        let assets = load_assets(dir.path());
        assert_eq!(assets.week.len(), 1);
        assert_eq!(assets.locations.len(), 1);
        assert!(assets.feed.is_some());
        assert_eq!(assets.lots.len(), 1);
    }

    #[test]
    fn station_coordinates_are_rounded_at_the_boundary() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "traffic.json",
            r#"[{"section_id": "A", "location": [25.03195, 121.56548],
                 "weekday": {}, "weekend": {}}]"#,
        );
        let assets = load_assets(dir.path());
        assert_eq!(assets.locations[0].location, [25.032, 121.565]);
    }

    #[test]
    fn every_missing_source_degrades_to_empty() {
        let assets = load_assets(TempDir::new().unwrap().path());
        assert!(assets.week.is_empty());
        assert!(assets.locations.is_empty());
        assert!(assets.feed.is_none());
        assert!(assets.lots.is_empty());
    }

    #[test]
    fn malformed_json_degrades_instead_of_failing() {
        let dir = TempDir::new().unwrap();
        write(&dir, "traffic_all.json", "{not json");
        write(&dir, "parking.json", r#"{"parking_lots": "nope"}"#);
        let assets = load_assets(dir.path());
        assert!(assets.week.is_empty());
        assert!(assets.feed.is_none());
    }
}
