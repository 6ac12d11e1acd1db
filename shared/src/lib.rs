//! Weight Goal Calculator Shared Library
//!
//! This crate contains the metrics engine and the shared types used by
//! the backend and WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod plan;
pub mod progress;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use plan::{compute_plan, PlanInput, WeightLossPlan};
pub use progress::{ProgressEntry, ProgressLog, ProgressSummary};
pub use types::*;
pub use units::*;
