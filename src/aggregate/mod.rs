//! Registration-data aggregation.
//!
//! This module turns the raw record sequence into the dashboard bundle:
//! independent per-dimension reducers, a headline-metrics pass, and an
//! orchestrator that assembles the [`types::Report`] the rendering
//! collaborator consumes.

pub mod reducers;
pub mod report;
pub mod summary;
pub mod types;
