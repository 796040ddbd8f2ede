use serde::{Deserialize, Serialize};

/// Per-km electricity rate used by the estimator panel, dollars.
pub const ELECTRICITY_RATE_PER_KM: f64 = 0.5;
/// Fixed remaining trip distance for the keep-driving branch, km.
pub const TRIP_DISTANCE_KM: f64 = 5.0;

/// Side-by-side totals for parking versus continuing to drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub electricity_cost: f64,
    pub parking_cost: f64,
}

/// Pure arithmetic over the user-adjustable estimator inputs.
///
/// Inputs are not validated; negative hours yield a negative parking cost.
pub fn estimate_costs(
    distance_km: f64,
    rate_per_km: f64,
    hourly_rate: f64,
    hours: f64,
) -> CostEstimate {
    CostEstimate {
        electricity_cost: distance_km * rate_per_km,
        parking_cost: hourly_rate * hours,
    }
}

/// Coarse traffic level selected in the estimator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Estimated delay shown next to the selector.
    pub fn delay_minutes(&self) -> u32 {
        match self {
            TrafficLevel::Light => 5,
            TrafficLevel::Moderate => 15,
            TrafficLevel::Heavy => 30,
        }
    }
}

/// The two estimator buttons. A pure label pair; picking one never changes
/// any computed cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Park,
    KeepDriving,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Park => "Park",
            Decision::KeepDriving => "Keep Driving",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_multiplies_rate_by_quantity() {
        let estimate = estimate_costs(5.0, 0.5, 3.0, 2.0);
        assert_eq!(estimate.electricity_cost, 2.5);
        assert_eq!(estimate.parking_cost, 6.0);
    }

    #[test]
    fn negative_hours_produce_a_negative_cost() {
        let estimate = estimate_costs(TRIP_DISTANCE_KM, ELECTRICITY_RATE_PER_KM, 3.0, -2.0);
        assert_eq!(estimate.parking_cost, -6.0);
        assert_eq!(estimate.electricity_cost, 2.5);
    }

    #[test]
    fn traffic_levels_map_to_fixed_delays() {
        assert_eq!(TrafficLevel::Light.delay_minutes(), 5);
        assert_eq!(TrafficLevel::Moderate.delay_minutes(), 15);
        assert_eq!(TrafficLevel::Heavy.delay_minutes(), 30);
    }

    #[test]
    fn decision_labels_match_the_buttons() {
        assert_eq!(Decision::Park.label(), "Park");
        assert_eq!(Decision::KeepDriving.label(), "Keep Driving");
    }
}
