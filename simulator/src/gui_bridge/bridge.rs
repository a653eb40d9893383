use crate::gui_bridge::model::AnalyticsView;
use crate::workflow::runner::Runner;
use anyhow::{Context, Result};
use loadcore::RangeSelector;
use log::{error, info};
use serde_json::json;
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter,
};

type SharedView = Arc<RwLock<Option<AnalyticsView>>>;

fn gui_bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

fn reply(body: serde_json::Value, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&body), status)
}

/// Bridge that hands analytics to the renderer over HTTP.
///
/// The most recently selected range is the active one: every range request
/// replaces the published view, and a regeneration re-aggregates it.
pub struct GuiBridge {
    runner: Arc<Runner>,
    state: SharedView,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            runner,
            state: Arc::new(RwLock::new(None)),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());

        let latest_route = warp::path!("analytics")
            .and(warp::get())
            .and(state_filter.clone())
            .and_then(handle_latest);

        let range_route = warp::path!("analytics" / String)
            .and(warp::get())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(handle_range);

        let regenerate_route = warp::path!("regenerate")
            .and(warp::post())
            .and(state_filter)
            .and(runner_filter.clone())
            .and_then(handle_regenerate);

        let status_route = warp::path!("status")
            .and(warp::get())
            .and(runner_filter)
            .and_then(handle_status);

        latest_route
            .or(range_route)
            .or(regenerate_route)
            .or(status_route)
    }

    /// Runs the HTTP endpoint on its own thread.
    pub fn serve(&self, port: u16) -> Result<()> {
        let routes = self.routes();
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building bridge runtime")?;
        let address = gui_bind_address(port);
        thread::spawn(move || {
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        });
        info!("[bridge] serving analytics on http://{}", address);
        Ok(())
    }

    pub fn publish(&self, view: &AnalyticsView) {
        let mut guard = match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(view.clone());
        println!(
            "[GUI] {} -> {} kWh, peak {} kW, {} points",
            view.range, view.total_display, view.peak_display, view.points_display
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<AnalyticsView> {
        self.state.read().ok().and_then(|guard| guard.clone())
    }
}

fn store_view(state: &SharedView, view: &AnalyticsView) {
    match state.write() {
        Ok(mut guard) => *guard = Some(view.clone()),
        Err(poisoned) => *poisoned.into_inner() = Some(view.clone()),
    }
}

fn active_range(state: &SharedView) -> Option<RangeSelector> {
    match state.read() {
        Ok(guard) => guard.as_ref().map(|view| view.range),
        Err(poisoned) => poisoned.into_inner().as_ref().map(|view| view.range),
    }
}

async fn handle_latest(state: SharedView) -> Result<WithStatus<Json>, Infallible> {
    let latest = match state.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    Ok(match latest {
        Some(view) => reply(json!(view), StatusCode::OK),
        None => reply(json!({"status": "no range selected"}), StatusCode::NOT_FOUND),
    })
}

async fn handle_range(
    range: String,
    state: SharedView,
    runner: Arc<Runner>,
) -> Result<WithStatus<Json>, Infallible> {
    let selector = match range.parse::<RangeSelector>() {
        Ok(selector) => selector,
        Err(err) => {
            return Ok(reply(
                json!({"status": "error", "message": err.to_string()}),
                StatusCode::BAD_REQUEST,
            ))
        }
    };
    let view = runner.analytics(selector);
    store_view(&state, &view);
    Ok(reply(json!(view), StatusCode::OK))
}

async fn handle_regenerate(
    state: SharedView,
    runner: Arc<Runner>,
) -> Result<WithStatus<Json>, Infallible> {
    let worker = runner.clone();
    let outcome = tokio::task::spawn_blocking(move || worker.regenerate()).await;
    let samples = match outcome {
        Ok(Ok(samples)) => samples,
        Ok(Err(err)) => {
            error!("regenerate error: {:#}", err);
            return Ok(reply(
                json!({"status": "error", "message": format!("{:#}", err)}),
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Err(err) => {
            error!("regenerate task failed: {}", err);
            return Ok(reply(
                json!({"status": "error", "message": "generation task failed"}),
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
    };

    if let Some(selector) = active_range(&state) {
        store_view(&state, &runner.analytics(selector));
    }
    Ok(reply(
        json!({"status": "ok", "samples": samples}),
        StatusCode::OK,
    ))
}

async fn handle_status(runner: Arc<Runner>) -> Result<WithStatus<Json>, Infallible> {
    Ok(reply(json!(runner.status()), StatusCode::OK))
}
