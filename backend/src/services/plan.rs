//! Calculator service

use crate::error::ApiError;
use tracing::debug;
use validator::Validate;
use weight_goal_shared::types::{CalculateRequest, PlanResponse};
use weight_goal_shared::compute_plan;

/// Weight loss plan calculations
pub struct PlanService;

impl PlanService {
    /// Validate the form, normalize it and compute the plan
    pub fn calculate(req: &CalculateRequest) -> Result<PlanResponse, ApiError> {
        req.validate()?;
        let (input, distance_unit) = req.to_plan_input()?;
        let plan = compute_plan(&input)?;

        debug!(
            goal = %input.goal,
            activity = %input.activity_level,
            exercise = %input.exercise_type,
            calorie_intake = plan.calorie_intake,
            days_to_goal = plan.days_to_goal,
            "Plan computed"
        );

        Ok(PlanResponse::new(plan, distance_unit, input.profile.height_cm))
    }
}
