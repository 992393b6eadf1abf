//! Data Table
//!
//! Searchable, paginated view over the loaded records.

use leptos::*;

use crate::format;
use crate::state::store::{total_pages, DashboardState, PAGE_SIZES};

/// Record table with search box, page-size selector and pagination controls.
#[component]
pub fn DataTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let filtered = state.filtered_data;
    let search_term = state.search_term;
    let page_size = state.page_size;
    let current_page = state.current_page;

    let search_state = state.clone();
    let on_search = move |ev| {
        search_state.apply_search(&event_target_value(&ev));
    };

    let size_state = state.clone();
    let on_page_size = move |ev| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            size_state.change_page_size(size);
        }
    };

    let rows_state = state.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between flex-wrap gap-4 mb-4">
                <h2 class="text-xl font-semibold">"Step Records"</h2>

                <div class="flex items-center gap-3">
                    <input
                        type="text"
                        placeholder="Search records..."
                        prop:value=move || search_term.get()
                        on:input=on_search
                        class="bg-gray-700 rounded-lg px-4 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <select
                        on:change=on_page_size
                        prop:value=move || page_size.get().to_string()
                        class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {PAGE_SIZES.iter().map(|size| view! {
                            <option value=size.to_string()>{format!("{} per page", size)}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <table class="w-full text-left">
                <thead>
                    <tr class="text-gray-400 text-sm border-b border-gray-700">
                        <th class="py-2">"Steps"</th>
                        <th class="py-2">"Time"</th>
                        <th class="py-2">"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows_state.page_records();

                        if rows.is_empty() {
                            let message = if search_term.get().is_empty() {
                                "No data available"
                            } else {
                                "No matching records found"
                            };
                            view! {
                                <tr>
                                    <td colspan="3" class="text-center py-4 text-gray-400">
                                        {message}
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|record| view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-2 font-semibold">{record.step_count}</td>
                                    <td class="py-2">{format::format_time(&record.client_timestamp)}</td>
                                    <td class="py-2">{format::format_date(&record.client_timestamp)}</td>
                                </tr>
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>

            // Showing X to Y of Z entries
            <div class="flex items-center justify-between flex-wrap gap-4 mt-4 text-sm text-gray-400">
                {move || {
                    let total = filtered.get().len();
                    let size = page_size.get();
                    let page = current_page.get();

                    if total == 0 {
                        "Showing 0 to 0 of 0 entries".to_string()
                    } else {
                        let from = (page - 1) * size + 1;
                        let to = (page * size).min(total);
                        format!("Showing {} to {} of {} entries", from, to, total)
                    }
                }}

                <Pagination />
            </div>
        </section>
    }
}

/// Previous / numbered pages / Next. Hidden when there is at most one page.
#[component]
fn Pagination() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let filtered = state.filtered_data;
    let page_size = state.page_size;
    let current_page = state.current_page;

    view! {
        <div class="flex items-center gap-1">
            {move || {
                let pages = total_pages(filtered.get().len(), page_size.get());
                let page = current_page.get();

                if pages <= 1 {
                    return view! {}.into_view();
                }

                let mut buttons = Vec::with_capacity(pages + 2);

                buttons.push(page_button(state.clone(), "Previous".to_string(), page.saturating_sub(1), page == 1, false));
                for target in 1..=pages {
                    buttons.push(page_button(state.clone(), target.to_string(), target, false, target == page));
                }
                buttons.push(page_button(state.clone(), "Next".to_string(), page + 1, page == pages, false));

                buttons.collect_view()
            }}
        </div>
    }
}

fn page_button(
    state: DashboardState,
    label: String,
    target: usize,
    disabled: bool,
    active: bool,
) -> impl IntoView {
    let class = if active {
        "px-3 py-1 rounded bg-primary-600 text-white font-medium"
    } else if disabled {
        "px-3 py-1 rounded bg-gray-700 text-gray-500 cursor-not-allowed"
    } else {
        "px-3 py-1 rounded bg-gray-700 text-gray-300 hover:bg-gray-600"
    };

    view! {
        <button
            class=class
            disabled=disabled
            on:click=move |_| state.change_page(target)
        >
            {label}
        </button>
    }
}
