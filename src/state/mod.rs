//! State Management
//!
//! Dashboard state container and the polling controller that feeds it.

pub mod poll;
pub mod store;
