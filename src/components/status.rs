//! Status Badges
//!
//! Connection and data-freshness badges plus the last-updated readout.

use leptos::*;

use crate::state::store::DashboardState;

/// Header strip showing backend reachability and data freshness.
#[component]
pub fn StatusBar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let connection = state.connection;
    let data_status = state.data_status;
    let last_updated = state.last_updated;

    view! {
        <div class="flex items-center flex-wrap gap-3 text-sm">
            {move || {
                let status = connection.get();
                view! {
                    <span class=format!(
                        "px-3 py-1 rounded-full text-white font-medium {}",
                        status.badge_class()
                    )>
                        {status.label()}
                    </span>
                }
            }}

            {move || {
                let status = data_status.get();
                view! {
                    <span class=format!(
                        "px-3 py-1 rounded-full text-white font-medium {}",
                        status.badge_class()
                    )>
                        {status.label()}
                    </span>
                }
            }}

            <span class="text-gray-400">
                {move || {
                    last_updated.get()
                        .map(|ts| format!("Last updated: {}", ts))
                        .unwrap_or_else(|| "Not updated yet".to_string())
                }}
            </span>
        </div>
    }
}
