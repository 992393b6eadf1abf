//! Chart Components
//!
//! Step timeline (line) and daily distribution (doughnut) drawn on HTML5
//! Canvas. Each chart clears and redraws its canvas inside an effect whenever
//! the underlying signals change, so there is never a stale frame or a
//! retained handle to dispose.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format;
use crate::state::store::{
    daily_totals, filter_by_time_range, last_seven_days, DashboardState, StepRecord, TimeRange,
};

/// Line color for the timeline series
const LINE_COLOR: &str = "#FF9800";

/// Segment colors for the distribution doughnut
const SEGMENT_COLORS: [&str; 7] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
    "#FFC107", // Amber
];

/// Step timeline chart with its time-range selector.
#[component]
pub fn TimelineChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let step_data = state.step_data;
    let time_range = state.time_range;

    // Redraw when data or the selected range changes
    create_effect(move |_| {
        let data = step_data.get();
        let range = time_range.get();

        if let Some(canvas) = canvas_ref.get() {
            let windowed = filter_by_time_range(&data, range);
            draw_timeline(&canvas, &windowed);
        }
    });

    let on_range_change = move |ev| {
        state.set_time_range(TimeRange::from_value(&event_target_value(&ev)));
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Step Timeline"</h2>
                <select
                    on:change=on_range_change
                    prop:value=move || time_range.get().as_value()
                    class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="1">"Last 24 hours"</option>
                    <option value="7">"Last 7 days"</option>
                    <option value="30">"Last 30 days"</option>
                    <option value="all">"All time"</option>
                </select>
            </div>

            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </section>
    }
}

/// Daily distribution doughnut over the most recent 7 days.
#[component]
pub fn DistributionChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let step_data = state.step_data;
    let buckets = create_memo(move |_| last_seven_days(daily_totals(&step_data.get())));

    create_effect(move |_| {
        let buckets = buckets.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_distribution(&canvas, &buckets);
        }
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Daily Distribution"</h2>

            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    buckets.get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (day, total))| {
                            let color = SEGMENT_COLORS[idx % SEGMENT_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-300">
                                        {format!("{} ({})", day, format::format_number(total))}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the timeline as an index-spaced line series, y starting at zero.
fn draw_timeline(canvas: &HtmlCanvasElement, records: &[StepRecord]) {
    let Some(ctx) = canvas_context(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if records.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    let max_value = records.iter().map(|r| r.step_count).max().unwrap_or(0) as f64;
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Horizontal grid lines and y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // One x slot per record, matching the backend's record order
    let step_x = if records.len() > 1 {
        chart_width / (records.len() - 1) as f64
    } else {
        0.0
    };
    let point_x = |i: usize| {
        if records.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + i as f64 * step_x
        }
    };
    let point_y = |count: u32| margin_top + (1.0 - count as f64 / y_max) * chart_height;

    // Line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, record) in records.iter().enumerate() {
        let x = point_x(i);
        let y = point_y(record.step_count);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, record) in records.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            point_x(i),
            point_y(record.step_count),
            3.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // X-axis date labels on up to 6 evenly spaced records
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let label_count = records.len().min(6);
    for slot in 0..label_count {
        let i = if label_count == 1 {
            0
        } else {
            slot * (records.len() - 1) / (label_count - 1)
        };
        let label = format::format_date(&records[i].client_timestamp);
        let _ = ctx.fill_text(&label, point_x(i) - 25.0, height - 10.0);
    }
}

/// Draw the daily-total doughnut.
fn draw_distribution(canvas: &HtmlCanvasElement, buckets: &[(String, u64)]) {
    let Some(ctx) = canvas_context(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: u64 = buckets.iter().map(|(_, sum)| *sum).sum();
    if total == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No activity data", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = width.min(height) / 2.0 - 20.0;
    let inner = outer * 0.6; // 60% cutout

    let mut start_angle = -std::f64::consts::FRAC_PI_2;
    for (idx, (_, sum)) in buckets.iter().enumerate() {
        let sweep = (*sum as f64 / total as f64) * std::f64::consts::PI * 2.0;
        let end_angle = start_angle + sweep;

        ctx.set_fill_style(&SEGMENT_COLORS[idx % SEGMENT_COLORS.len()].into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start_angle, end_angle);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end_angle, start_angle, true);
        ctx.close_path();
        ctx.fill();

        // Segment border
        ctx.set_stroke_style(&"#1f2937".into());
        ctx.set_line_width(2.0);
        ctx.stroke();

        start_angle = end_angle;
    }

    // Total in the center
    ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
    ctx.set_font("bold 20px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&format::format_number(total), cx, cy);
    ctx.set_font("12px sans-serif");
    ctx.set_fill_style(&"#9ca3af".into());
    let _ = ctx.fill_text("steps / 7 days", cx, cy + 18.0);
    ctx.set_text_align("start");
}
