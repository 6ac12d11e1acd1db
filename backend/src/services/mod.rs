//! Service layer for business logic
//!
//! Services sit between routes and the repository/metrics engine.

pub mod auth;
pub mod plan;
pub mod progress;

pub use auth::AuthService;
pub use plan::PlanService;
pub use progress::ProgressService;
