use anyhow::Context;
use parkcore::cost::{ELECTRICITY_RATE_PER_KM, TRIP_DISTANCE_KM};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunable knobs for one site build.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the four static data assets.
    pub data_dir: PathBuf,
    pub electricity_rate_per_km: f64,
    pub trip_distance_km: f64,
    /// Locations shown in the small-multiples grid.
    pub grid_limit: usize,
    /// Seed for the mock hourly-rate enrichment.
    pub rate_seed: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            electricity_rate_per_km: ELECTRICITY_RATE_PER_KM,
            trip_distance_km: TRIP_DISTANCE_KM,
            grid_limit: 10,
            rate_seed: 0,
        }
    }
}

impl SiteConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading site config {}", path_ref.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing site config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(data_dir: PathBuf, rate_seed: u64) -> Self {
        Self {
            data_dir,
            rate_seed,
            ..Self::default()
        }
    }
}
