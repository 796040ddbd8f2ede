use crate::view::model::SiteModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use parkcore::cost::TrafficLevel;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn data_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct BridgeError;

impl warp::reject::Reject for BridgeError {}

/// Estimator inputs posted by the page panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Name of the selected parking lot.
    pub lot: String,
    /// Parking duration in hours.
    pub hours: f64,
    pub traffic: TrafficLevel,
}

/// Bridge that hosts the chart-data HTTP endpoints for the page views.
///
/// Views fetch their snapshot once on display; the bridge never pushes.
pub struct DataBridge {
    state: Arc<RwLock<SiteModel>>,
}

impl DataBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(SiteModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let model_route = warp::path("model")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SiteModel>>| warp::reply::json(&*state.read().unwrap()));

        let estimate_route = warp::path("estimate")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |request: EstimateRequest,
                 state: Arc<RwLock<SiteModel>>,
                 runner: Arc<Runner>| async move {
                    let hourly_rate = {
                        let guard = state.read().unwrap();
                        guard
                            .lots
                            .iter()
                            .find(|lot| lot.name == request.lot)
                            .map(|lot| lot.cost_per_hour)
                    };
                    match hourly_rate {
                        Some(rate) => {
                            let estimate = runner.estimate(rate, request.hours);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "electricity_cost": estimate.electricity_cost,
                                    "parking_cost": estimate.parking_cost,
                                    "delay_minutes": request.traffic.delay_minutes(),
                                })),
                                StatusCode::OK,
                            ))
                        }
                        None => {
                            eprintln!("estimate error: unknown lot {}", request.lot);
                            Err(warp::reject::custom(BridgeError))
                        }
                    }
                },
            );

        let refresh_route = warp::path("refresh")
            .and(warp::post())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |state: Arc<RwLock<SiteModel>>, runner: Arc<Runner>| async move {
                    let model = runner.refresh();
                    let mut guard = state.write().unwrap();
                    *guard = model;
                    Ok::<_, warp::Rejection>(warp::reply::with_status(
                        warp::reply::json(&json!({
                            "status": "ok",
                            "weekly": guard.weekly.len(),
                            "locations": guard.locations.len(),
                            "markers": guard.markers.len(),
                        })),
                        StatusCode::OK,
                    ))
                },
            );

        thread::spawn(move || {
            let routes = model_route.or(estimate_route).or(refresh_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(data_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &SiteModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[SITE] weekly points: {}, locations: {}, markers: {}",
            guard.weekly.len(),
            guard.locations.len(),
            guard.markers.len()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[SITE] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SiteModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::loader::SiteAssets;
    use crate::workflow::config::SiteConfig;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn data_bridge_updates_state() {
        let cfg = SiteConfig::from_args(PathBuf::from("unused"), 0);
        let runner = Arc::new(Runner::new(cfg));
        let bridge = DataBridge::new(runner.clone());
        let model = runner.execute(&SiteAssets::default());
        bridge.publish(&model).unwrap();
        assert_eq!(
            bridge.snapshot().default_estimate.electricity_cost,
            model.default_estimate.electricity_cost
        );
        assert!(bridge.snapshot().lots.is_empty());
    }
}
