//! Vacancy Dashboard - Job Market Analytics Report Generator
//!
//! Renders four pre-aggregated vacancy datasets (skills, salary by region,
//! seniority, responsibilities) as static SVG charts assembled into a single
//! HTML dashboard page.

pub mod charts;
pub mod dashboard;
pub mod data;

pub use dashboard::{DashboardError, DashboardGenerator, GeneratedDashboard};
pub use data::{CategoryMapping, DatasetBundle, DatasetLoader};
