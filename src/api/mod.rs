//! Backend API
//!
//! HTTP client for the step-counter backend.

pub mod client;

pub use client::{check_health, fetch_stats, fetch_step_data, get_device_id};
