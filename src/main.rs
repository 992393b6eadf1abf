//! Step Counter Dashboard
//!
//! Browser dashboard for a step-counter backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Periodic polling of the stats and step-record endpoints
//! - Summary statistics, timeline and daily-distribution charts
//! - Recent-activity feed and a searchable, paginated record table
//! - Independent backend health checks driving a connection badge
//! - Client-side JSON export
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the backend over plain HTTP polling; two
//! unsynchronized timers drive data refresh (10s) and health checks (30s).

use leptos::*;

mod api;
mod app;
mod components;
mod export;
mod format;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
