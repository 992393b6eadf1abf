//! Statistics Panel
//!
//! Summary cards across the top of the dashboard.

use leptos::*;

use crate::format;
use crate::state::store::{calculate_today_steps, DashboardState};

/// Grid of summary statistic cards.
#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats = state.stats;
    let step_data = state.step_data;

    let total_steps = create_memo(move |_| format::format_number(stats.get().total_steps));
    let total_records = create_memo(move |_| format::format_number(stats.get().records_count));
    let avg_steps = create_memo(move |_| {
        let s = stats.get();
        format::format_number(format::average_steps(s.total_steps, s.records_count))
    });
    let today_steps =
        create_memo(move |_| format::format_number(calculate_today_steps(&step_data.get())));
    let device_id = create_memo(move |_| {
        let id = stats.get().device_id;
        if id.is_empty() {
            "—".to_string()
        } else {
            id
        }
    });

    view! {
        <section>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <StatCard label="Total Steps" value=total_steps icon="👟" />
                <StatCard label="Total Records" value=total_records icon="🗂" />
                <StatCard label="Average Steps" value=avg_steps icon="📈" />
                <StatCard label="Today's Steps" value=today_steps icon="🚶" />
                <StatCard label="Device" value=device_id icon="📱" />
            </div>
        </section>
    }
}

/// Single statistic card.
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-lg">{icon}</span>
            </div>
            <div class="text-2xl font-bold mt-2 truncate">
                {move || value.get()}
            </div>
        </div>
    }
}
