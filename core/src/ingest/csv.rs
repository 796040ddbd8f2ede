use crate::records::ParkingLot;

// Fixed column positions in the parking table dump.
const COL_ID: usize = 0;
const COL_LNG: usize = 4;
const COL_LAT: usize = 5;
const COL_PAYEX: usize = 9;
const COL_AVAILABLE: usize = 11;

/// Parses the flat parking table into typed lot records.
///
/// The source is an unescaped comma-delimited dump read by fixed column
/// position; there is no quoting or escaping support. A row is kept only
/// when `id` is non-empty and `lat`, `lng`, and `payex` all parse as finite
/// numbers. Short rows, blank lines, and rows with non-numeric required
/// fields are dropped silently -- lenient ingestion, not an error path. A
/// failed `availablecar` only loses marker sizing, so the row survives with
/// the field unset.
pub fn parse_parking_csv(text: &str) -> Vec<ParkingLot> {
    text.lines()
        .filter_map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            let id = cols.get(COL_ID).copied().unwrap_or("").trim();
            if id.is_empty() {
                return None;
            }
            let lng = parse_finite(cols.get(COL_LNG).copied())?;
            let lat = parse_finite(cols.get(COL_LAT).copied())?;
            let payex = parse_finite(cols.get(COL_PAYEX).copied())?;
            Some(ParkingLot {
                id: id.to_string(),
                lat,
                lng,
                payex,
                available_cars: parse_finite(cols.get(COL_AVAILABLE).copied()),
            })
        })
        .collect()
}

fn parse_finite(col: Option<&str>) -> Option<f64> {
    col.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
