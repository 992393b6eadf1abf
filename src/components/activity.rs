//! Recent Activity Feed
//!
//! The last eight records, most recent first.

use leptos::*;

use crate::format;
use crate::state::store::DashboardState;

/// Recent activity list.
#[component]
pub fn RecentActivity() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let step_data = state.step_data;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>

            <div class="space-y-2">
                {move || {
                    let data = step_data.get();
                    let recent: Vec<_> = data.iter().rev().take(8).cloned().collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm text-center py-4">
                                "No activity data available"
                            </p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|record| {
                            let time = format::format_datetime(&record.client_timestamp);
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-2xl">"🚶"</span>
                                        <span class="font-semibold">
                                            {format!("{} steps", format::format_number(u64::from(record.step_count)))}
                                        </span>
                                    </div>
                                    <span class="text-gray-400 text-sm">{time}</span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
