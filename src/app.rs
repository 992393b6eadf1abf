//! App Root Component
//!
//! Single-page dashboard layout with the global state provider and the poll
//! loops.

use leptos::*;

use crate::components::{
    DataTable, DistributionChart, RecentActivity, StatsPanel, StatusBar, TimelineChart, Toast,
};
use crate::export;
use crate::state::poll;
use crate::state::store::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    // Start the data refresh and health check loops
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    poll::init_polling(state.clone());

    let refresh_state = state.clone();
    let on_refresh = move |_| {
        poll::refresh_now(refresh_state.clone());
    };

    let export_state = state;
    let on_export = move |_| {
        let records = export_state.step_data.get_untracked();
        if export::export_records(&records) {
            export_state.show_success("Data exported");
        } else {
            export_state.show_error("Export failed");
        }
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <header class="border-b border-gray-700 bg-gray-800">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between flex-wrap gap-4">
                    <div>
                        <h1 class="text-2xl font-bold">"Step Counter Dashboard"</h1>
                        <StatusBar />
                    </div>

                    <div class="flex items-center gap-3">
                        <button
                            on:click=on_refresh
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "Refresh"
                        </button>
                        <button
                            on:click=on_export
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Export"
                        </button>
                    </div>
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 space-y-8">
                <StatsPanel />

                <div class="grid lg:grid-cols-2 gap-8">
                    <TimelineChart />
                    <DistributionChart />
                </div>

                <RecentActivity />

                <DataTable />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
