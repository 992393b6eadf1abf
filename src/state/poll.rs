//! Poll Controller
//!
//! Two independent timer loops drive the dashboard: a data refresh every 10s
//! and a health check every 30s. Both run once immediately at startup. The
//! loops are not synchronized with each other and there is no overlap guard;
//! a slow refresh can race the next fire and the last completion wins.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::state::store::{ConnectionStatus, DashboardState, DataStatus};

/// Data refresh period (milliseconds)
pub const REFRESH_INTERVAL_MS: u32 = 10_000;

/// Health check period (milliseconds)
pub const HEALTH_INTERVAL_MS: u32 = 30_000;

/// Kick off the two poll loops. Each runs for the lifetime of the page, so
/// the interval handles are leaked on purpose.
pub fn init_polling(state: DashboardState) {
    let refresh_state = state.clone();
    spawn_local(async move { refresh_cycle(refresh_state).await });

    let health_state = state.clone();
    spawn_local(async move { health_cycle(health_state).await });

    let interval_state = state.clone();
    Interval::new(REFRESH_INTERVAL_MS, move || {
        let state = interval_state.clone();
        spawn_local(async move { refresh_cycle(state).await });
    })
    .forget();

    Interval::new(HEALTH_INTERVAL_MS, move || {
        let state = state.clone();
        spawn_local(async move { health_cycle(state).await });
    })
    .forget();
}

/// One coordinated fetch-and-apply pass over stats and step records.
///
/// Stats and steps are fetched concurrently; either both land in the state or
/// neither does. Failures are absorbed here: console log, `Error` badge,
/// error toast. The next timer fire is the only retry.
pub async fn refresh_cycle(state: DashboardState) {
    state.data_status.set(DataStatus::Loading);

    let device_id = api::get_device_id();
    let (stats, steps) = futures::future::join(
        api::fetch_stats(&device_id),
        api::fetch_step_data(&device_id),
    )
    .await;

    match (stats, steps) {
        (Ok(stats), Ok(steps)) => {
            state.stats.set(stats);
            state.replace_records(steps);
            state.data_status.set(DataStatus::Live);
            state.last_updated.set(Some(
                chrono::Local::now().format("%m/%d/%Y %H:%M:%S").to_string(),
            ));
        }
        (Err(e), _) | (_, Err(e)) => {
            web_sys::console::error_1(&format!("Error loading data: {}", e).into());
            state.data_status.set(DataStatus::Error);
            state.show_error("Failed to load data. Please check backend connection.");
        }
    }
}

/// One health probe. Only ever touches the connection badge, so a failing
/// backend never interrupts the data loop.
pub async fn health_cycle(state: DashboardState) {
    let healthy = api::check_health().await;
    state.connection.set(if healthy {
        ConnectionStatus::Connected
    } else {
        ConnectionStatus::Disconnected
    });
}

/// User-invoked refresh, wired to the header button.
pub fn refresh_now(state: DashboardState) {
    spawn_local(async move { refresh_cycle(state).await });
}
