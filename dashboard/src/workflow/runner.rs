use crate::assets::loader::{load_assets, SiteAssets};
use crate::assets::mock::mock_hourly_rates;
use crate::view::model::{GridView, LocationView, LotOption, MarkerView, SiteModel};
use crate::workflow::config::SiteConfig;
use parkcore::cost::{estimate_costs, CostEstimate};
use parkcore::numeric::{color_scale, value_range};
use parkcore::records::LocationRecord;
use parkcore::series::{
    build_weekly_series, comparison_series, observed_series, predicted_series, LinePoint,
    SeriesKind,
};

/// Executes the whole transform pipeline over one asset snapshot.
#[derive(Clone)]
pub struct Runner {
    config: SiteConfig,
}

impl Runner {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Rebuilds the model from the assets currently on disk.
    pub fn refresh(&self) -> SiteModel {
        let assets = load_assets(&self.config.data_dir);
        self.execute(&assets)
    }

    /// Derives the chart-ready site model. Nothing here is fatal: a
    /// location with a broken predicted curve degrades to an empty series
    /// for that chart and the rest of the model still builds.
    pub fn execute(&self, assets: &SiteAssets) -> SiteModel {
        let weekly = build_weekly_series(&assets.week);

        let locations = assets
            .locations
            .iter()
            .map(|loc| LocationView {
                section_id: loc.section_id.clone(),
                location: loc.location,
                weekday_observed: observed_series(loc, SeriesKind::Weekday),
                weekend_observed: observed_series(loc, SeriesKind::Weekend),
                weekday_predicted: predicted_or_empty(loc, SeriesKind::Weekday),
                weekend_predicted: predicted_or_empty(loc, SeriesKind::Weekend),
            })
            .collect();

        let grid = assets
            .locations
            .iter()
            .take(self.config.grid_limit)
            .map(|loc| match comparison_series(loc) {
                Ok(points) => GridView {
                    section_id: loc.section_id.clone(),
                    points,
                },
                Err(err) => {
                    log::warn!("grid chart for {} degraded: {}", loc.section_id, err);
                    GridView {
                        section_id: loc.section_id.clone(),
                        points: Vec::new(),
                    }
                }
            })
            .collect();

        let payex_range = value_range(assets.lots.iter().map(|lot| lot.payex));
        let markers = assets
            .lots
            .iter()
            .map(|lot| {
                let (min, max) = payex_range.unwrap_or((lot.payex, lot.payex));
                MarkerView {
                    id: lot.id.clone(),
                    name: lot.display_name(),
                    lat: lot.lat,
                    lng: lot.lng,
                    payex: lot.payex,
                    available_cars: lot.available_cars,
                    radius: lot
                        .available_cars
                        .map(|cars| (cars / 200.0).ceil())
                        .unwrap_or(1.0),
                    fill: color_scale(lot.payex, min, max).css(),
                }
            })
            .collect();

        let lots: Vec<LotOption> = match &assets.feed {
            Some(feed) => {
                let rates = mock_hourly_rates(feed.parking_lots.len(), self.config.rate_seed);
                feed.parking_lots
                    .iter()
                    .zip(rates)
                    .map(|(lot, rate)| LotOption {
                        name: lot.name.clone(),
                        lat: lot.y,
                        lng: lot.x,
                        cost_per_hour: rate,
                        route: lot.route_latlng(),
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        let start = assets.feed.as_ref().map(|feed| feed.start_point.latlng());

        let default_estimate = self.estimate(
            lots.first().map(|lot| lot.cost_per_hour).unwrap_or(0.0),
            1.0,
        );

        SiteModel {
            weekly,
            locations,
            grid,
            markers,
            lots,
            start,
            default_estimate,
        }
    }

    /// Cost estimate for one lot rate and parking duration, using the
    /// configured trip constants.
    pub fn estimate(&self, hourly_rate: f64, hours: f64) -> CostEstimate {
        estimate_costs(
            self.config.trip_distance_km,
            self.config.electricity_rate_per_km,
            hourly_rate,
            hours,
        )
    }
}

fn predicted_or_empty(loc: &LocationRecord, kind: SeriesKind) -> Vec<LinePoint> {
    match predicted_series(loc, kind) {
        Ok(points) => points,
        Err(err) => {
            log::warn!("predicted series degraded: {}", err);
            Vec::new()
        }
    }
}
