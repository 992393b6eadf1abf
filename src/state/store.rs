//! Dashboard State
//!
//! Reactive state management using Leptos signals. All mutation goes through
//! `DashboardState` methods so the invariants hold in one place: the filtered
//! view is always derived from the loaded records and the active search term,
//! and the current page always lands inside the filtered page range.

use leptos::*;

use crate::format;

/// Page sizes the table selector offers.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// One step-count observation from the backend.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StepRecord {
    pub step_count: u32,
    pub client_timestamp: String,
    pub server_timestamp: String,
}

/// Server-side summary snapshot.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Stats {
    pub total_steps: u64,
    pub records_count: u64,
    pub device_id: String,
}

/// Time window for the timeline chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeRange {
    Days(i64),
    All,
}

impl TimeRange {
    /// Parse a selector value ("1", "7", "30", "all").
    pub fn from_value(value: &str) -> Self {
        match value {
            "1" => TimeRange::Days(1),
            "7" => TimeRange::Days(7),
            "30" => TimeRange::Days(30),
            _ => TimeRange::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            TimeRange::Days(1) => "1",
            TimeRange::Days(7) => "7",
            TimeRange::Days(30) => "30",
            _ => "all",
        }
    }
}

/// Backend reachability, driven by the health-check loop only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "bg-gray-600",
            ConnectionStatus::Connected => "bg-green-600",
            ConnectionStatus::Disconnected => "bg-red-600",
        }
    }
}

/// Data freshness, driven by the refresh loop. Never returns to `Unknown`
/// after the first cycle starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataStatus {
    #[default]
    Unknown,
    Loading,
    Live,
    Error,
}

impl DataStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DataStatus::Unknown => "Unknown",
            DataStatus::Loading => "Loading",
            DataStatus::Live => "Live",
            DataStatus::Error => "Error",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DataStatus::Unknown => "bg-gray-600",
            DataStatus::Loading => "bg-yellow-600",
            DataStatus::Live => "bg-green-600",
            DataStatus::Error => "bg-red-600",
        }
    }
}

/// Global dashboard state provided to all components.
#[derive(Clone)]
pub struct DashboardState {
    /// Latest summary snapshot from the backend
    pub stats: RwSignal<Stats>,
    /// All records from the last successful fetch
    pub step_data: RwSignal<Vec<StepRecord>>,
    /// Records matching the active search term
    pub filtered_data: RwSignal<Vec<StepRecord>>,
    /// 1-based table page
    pub current_page: RwSignal<usize>,
    /// Rows per table page
    pub page_size: RwSignal<usize>,
    /// Active search term, as typed (matching is case-insensitive)
    pub search_term: RwSignal<String>,
    /// Window for the timeline chart
    pub time_range: RwSignal<TimeRange>,
    /// Backend reachability badge
    pub connection: RwSignal<ConnectionStatus>,
    /// Data freshness badge
    pub data_status: RwSignal<DataStatus>,
    /// Wall-clock time of the last successful refresh
    pub last_updated: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide dashboard state to the component tree.
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

impl DashboardState {
    /// Fresh startup state: no records, first page, neutral badges.
    pub fn new() -> Self {
        DashboardState {
            stats: create_rw_signal(Stats::default()),
            step_data: create_rw_signal(Vec::new()),
            filtered_data: create_rw_signal(Vec::new()),
            current_page: create_rw_signal(1),
            page_size: create_rw_signal(PAGE_SIZES[0]),
            search_term: create_rw_signal(String::new()),
            time_range: create_rw_signal(TimeRange::All),
            connection: create_rw_signal(ConnectionStatus::Unknown),
            data_status: create_rw_signal(DataStatus::Unknown),
            last_updated: create_rw_signal(None),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Replace the loaded records wholesale after a successful fetch.
    ///
    /// The active search term is re-applied to the fresh data and the current
    /// page is clamped into the new page range.
    pub fn replace_records(&self, records: Vec<StepRecord>) {
        let term = self.search_term.get_untracked();
        let filtered = filter_records(&records, &term);

        let pages = total_pages(filtered.len(), self.page_size.get_untracked());
        self.current_page.update(|page| {
            *page = (*page).clamp(1, pages.max(1));
        });

        self.step_data.set(records);
        self.filtered_data.set(filtered);
    }

    /// Re-filter the table from a new search term and jump back to page 1.
    /// The term is kept verbatim so the input echoes what the user typed;
    /// `filter_records` handles case folding.
    pub fn apply_search(&self, term: &str) {
        let filtered = filter_records(&self.step_data.get_untracked(), term);

        self.search_term.set(term.to_string());
        self.filtered_data.set(filtered);
        self.current_page.set(1);
    }

    /// Number of table pages for the current filtered view.
    pub fn total_pages(&self) -> usize {
        total_pages(
            self.filtered_data.get().len(),
            self.page_size.get(),
        )
    }

    /// Records on the current table page.
    pub fn page_records(&self) -> Vec<StepRecord> {
        let data = self.filtered_data.get();
        paginate(&data, self.current_page.get(), self.page_size.get()).to_vec()
    }

    /// Jump to a page. Out-of-range targets are ignored.
    pub fn change_page(&self, page: usize) {
        let pages = total_pages(
            self.filtered_data.get_untracked().len(),
            self.page_size.get_untracked(),
        );
        if page >= 1 && page <= pages {
            self.current_page.set(page);
        }
    }

    /// Switch the rows-per-page setting and jump back to page 1.
    pub fn change_page_size(&self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size.set(size);
            self.current_page.set(1);
        }
    }

    pub fn set_time_range(&self, range: TimeRange) {
        self.time_range.set(range);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

// ============ Pure helpers ============

/// Case-insensitive substring filter over the stringified step count and both
/// raw timestamps. An empty term keeps everything.
pub fn filter_records(records: &[StepRecord], term: &str) -> Vec<StepRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    let term = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.step_count.to_string().contains(&term)
                || record.client_timestamp.to_lowercase().contains(&term)
                || record.server_timestamp.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// The half-open slice `[(page-1)*size, page*size)` of `records`.
/// Out-of-range pages yield an empty slice.
pub fn paginate(records: &[StepRecord], page: usize, page_size: usize) -> &[StepRecord] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= records.len() {
        return &[];
    }
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// Ceiling division; 0 for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    (len + page_size - 1) / page_size
}

/// Keep records whose client timestamp is on/after `now - N days`. Records
/// with unparseable timestamps are dropped. `All` keeps everything.
pub fn filter_by_time_range(records: &[StepRecord], range: TimeRange) -> Vec<StepRecord> {
    let days = match range {
        TimeRange::All => return records.to_vec(),
        TimeRange::Days(days) => days,
    };

    let cutoff = chrono::Local::now().naive_local() - chrono::Duration::days(days);
    records
        .iter()
        .filter(|record| {
            format::parse_timestamp(&record.client_timestamp)
                .map(|ts| ts >= cutoff)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Per-calendar-day step sums, in first-seen record order.
pub fn daily_totals(records: &[StepRecord]) -> Vec<(String, u64)> {
    let mut totals: Vec<(String, u64)> = Vec::new();

    for record in records {
        let Some(day) = format::day_key(&record.client_timestamp) else {
            continue;
        };
        match totals.iter_mut().find(|(key, _)| *key == day) {
            Some((_, sum)) => *sum += u64::from(record.step_count),
            None => totals.push((day, u64::from(record.step_count))),
        }
    }

    totals
}

/// The most recent 7 distinct days of `daily_totals`, preserving order.
pub fn last_seven_days(totals: Vec<(String, u64)>) -> Vec<(String, u64)> {
    let skip = totals.len().saturating_sub(7);
    totals.into_iter().skip(skip).collect()
}

/// Sum of step counts for records dated today (local calendar date).
pub fn calculate_today_steps(records: &[StepRecord]) -> u64 {
    let today = chrono::Local::now().date_naive();
    records
        .iter()
        .filter(|record| {
            format::parse_timestamp(&record.client_timestamp)
                .map(|ts| ts.date() == today)
                .unwrap_or(false)
        })
        .map(|record| u64::from(record.step_count))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use leptos::{create_runtime, SignalGetUntracked};

    fn record(step_count: u32, client_timestamp: &str) -> StepRecord {
        StepRecord {
            step_count,
            client_timestamp: client_timestamp.to_string(),
            server_timestamp: client_timestamp.to_string(),
        }
    }

    fn records(n: usize) -> Vec<StepRecord> {
        (0..n)
            .map(|i| record(i as u32 + 1, &format!("2025-08-{:02}T10:00:00", i % 28 + 1)))
            .collect()
    }

    fn stamp_days_ago(days: i64) -> String {
        (Local::now() - Duration::days(days))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
    }

    #[test]
    fn test_paginate_partitions_exactly() {
        let data = records(23);
        let pages = total_pages(data.len(), 10);
        assert_eq!(pages, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&data, page, 10);
            assert!(slice.len() <= 10);
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let data = records(5);
        assert!(paginate(&data, 0, 10).is_empty());
        assert!(paginate(&data, 2, 10).is_empty());
        assert!(paginate(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let data = records(7);
        assert_eq!(filter_records(&data, ""), data);
    }

    #[test]
    fn test_filter_matches_count_and_timestamps() {
        let data = vec![
            record(1234, "2025-08-01T10:00:00"),
            record(55, "2025-07-15T09:00:00"),
        ];

        let by_count = filter_records(&data, "1234");
        assert_eq!(by_count.len(), 1);
        assert_eq!(by_count[0].step_count, 1234);

        let by_date = filter_records(&data, "2025-07");
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date[0].step_count, 55);

        assert!(filter_records(&data, "no-such-thing").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = records(20);
        let once = filter_records(&data, "1");
        let twice = filter_records(&once, "1");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let data = vec![record(10, "2025-08-01T10:00:00Z")];
        assert_eq!(filter_records(&data, "z").len(), 1);
    }

    #[test]
    fn test_time_range_keeps_recent_drops_old() {
        let recent = record(100, &stamp_days_ago(2));
        let old = record(200, &stamp_days_ago(10));
        let data = vec![old, recent.clone()];

        let kept = filter_by_time_range(&data, TimeRange::Days(7));
        assert_eq!(kept, vec![recent]);
    }

    #[test]
    fn test_time_range_all_keeps_everything() {
        let data = vec![record(1, &stamp_days_ago(400)), record(2, "garbage")];
        assert_eq!(filter_by_time_range(&data, TimeRange::All), data);
    }

    #[test]
    fn test_time_range_drops_unparseable() {
        let data = vec![record(1, "garbage"), record(2, &stamp_days_ago(0))];
        let kept = filter_by_time_range(&data, TimeRange::Days(1));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].step_count, 2);
    }

    #[test]
    fn test_time_range_values_round_trip() {
        for value in ["1", "7", "30", "all"] {
            assert_eq!(TimeRange::from_value(value).as_value(), value);
        }
        assert_eq!(TimeRange::from_value("bogus"), TimeRange::All);
    }

    #[test]
    fn test_daily_totals_sums_per_day_in_order() {
        let data = vec![
            record(100, "2025-08-01T08:00:00"),
            record(50, "2025-08-02T09:00:00"),
            record(25, "2025-08-01T20:00:00"),
            record(9, "garbage"),
        ];

        let totals = daily_totals(&data);
        assert_eq!(
            totals,
            vec![
                ("Aug 01, 2025".to_string(), 125),
                ("Aug 02, 2025".to_string(), 50),
            ]
        );
    }

    #[test]
    fn test_last_seven_days_truncates_from_front() {
        let totals: Vec<(String, u64)> =
            (1..=9).map(|d| (format!("Aug {:02}, 2025", d), d)).collect();

        let recent = last_seven_days(totals);
        assert_eq!(recent.len(), 7);
        assert_eq!(recent[0].0, "Aug 03, 2025");
        assert_eq!(recent[6].0, "Aug 09, 2025");
    }

    #[test]
    fn test_today_steps_empty() {
        assert_eq!(calculate_today_steps(&[]), 0);
    }

    #[test]
    fn test_today_steps_sums_only_today() {
        let data = vec![
            record(100, &stamp_days_ago(0)),
            record(200, &stamp_days_ago(0)),
            record(999, &stamp_days_ago(1)),
        ];
        assert_eq!(calculate_today_steps(&data), 300);
    }

    #[test]
    fn test_today_steps_none_today() {
        let data = vec![record(100, &stamp_days_ago(3)), record(50, &stamp_days_ago(1))];
        assert_eq!(calculate_today_steps(&data), 0);
    }

    #[test]
    fn test_change_page_rejects_out_of_range() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.replace_records(records(25)); // 3 pages of 10

        state.change_page(0);
        assert_eq!(state.current_page.get_untracked(), 1);
        state.change_page(4);
        assert_eq!(state.current_page.get_untracked(), 1);
        state.change_page(3);
        assert_eq!(state.current_page.get_untracked(), 3);
        runtime.dispose();
    }

    #[test]
    fn test_apply_search_empty_restores_full_view_and_page() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let data = records(15);
        state.replace_records(data.clone());
        state.change_page(2);

        state.apply_search("");
        assert_eq!(state.filtered_data.get_untracked(), data);
        assert_eq!(state.current_page.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn test_apply_search_keeps_term_as_typed() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.replace_records(vec![record(10, "2025-08-01T10:00:00Z")]);

        // The input echoes the raw term; matching is still case-insensitive
        state.apply_search("Z");
        assert_eq!(state.search_term.get_untracked(), "Z");
        assert_eq!(state.filtered_data.get_untracked().len(), 1);
        runtime.dispose();
    }

    #[test]
    fn test_replace_records_clamps_page_on_shrink() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.replace_records(records(30));
        state.change_page(3);

        state.replace_records(records(5));
        assert_eq!(state.current_page.get_untracked(), 1);

        state.replace_records(Vec::new());
        assert_eq!(state.current_page.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn test_replace_records_reapplies_search() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.apply_search("no-such-thing");

        state.replace_records(records(5));
        assert_eq!(state.step_data.get_untracked().len(), 5);
        assert!(state.filtered_data.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_change_page_size_allowed_set() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.replace_records(records(30));
        state.change_page(2);

        // Not in the allowed set: nothing moves
        state.change_page_size(7);
        assert_eq!(state.page_size.get_untracked(), PAGE_SIZES[0]);
        assert_eq!(state.current_page.get_untracked(), 2);

        state.change_page_size(25);
        assert_eq!(state.page_size.get_untracked(), 25);
        assert_eq!(state.current_page.get_untracked(), 1);
        runtime.dispose();
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(ConnectionStatus::Disconnected.badge_class(), "bg-red-600");
        assert_eq!(DataStatus::Loading.label(), "Loading");
        assert_eq!(DataStatus::Live.badge_class(), "bg-green-600");
        assert_eq!(DataStatus::default(), DataStatus::Unknown);
    }
}
