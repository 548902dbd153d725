//! Benefits and payroll engine for a training-center foundation.
//!
//! This crate computes employee bonuses (seniority, academic and the
//! configurable generic bonuses), payroll totals, food-program totals,
//! performance-evaluation bonuses and student course debt, and records the
//! resulting payments through a storage seam and a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
