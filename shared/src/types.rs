//! API request and response types

use crate::errors::CalculationError;
use crate::health_metrics::{ActivityLevel, ExerciseType, Gender, Goal, Profile};
use crate::plan::{PlanInput, WeightLossPlan};
use crate::progress::{ProgressEntry, ProgressSummary};
use crate::units::{DistanceUnit, HeightUnit};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}

/// Session token issued on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
}

/// Current user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
}

// ============================================================================
// Calculator Types
// ============================================================================

/// Calculator form submission
///
/// Choice fields are free-form strings ("Lightly Active", "lose_weight", ...)
/// and are normalized by [`CalculateRequest::to_plan_input`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateRequest {
    #[validate(range(exclusive_min = 0.0))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub desired_weight_kg: f64,
    /// Height in `height_unit` (defaults to centimeters)
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
    #[serde(default)]
    pub height_unit: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub age_years: f64,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub activity_level: String,
    #[validate(length(min = 1))]
    pub goal: String,
    #[validate(length(min = 1))]
    pub exercise_type: String,
    /// Unit for `distance_per_day` in the response (defaults to miles)
    #[serde(default)]
    pub distance_unit: Option<String>,
}

impl CalculateRequest {
    /// Normalize units and choice strings into typed calculator input
    pub fn to_plan_input(&self) -> Result<(PlanInput, DistanceUnit), CalculationError> {
        let height_unit: HeightUnit = match &self.height_unit {
            Some(unit) => unit.parse()?,
            None => HeightUnit::default(),
        };
        let distance_unit: DistanceUnit = match &self.distance_unit {
            Some(unit) => unit.parse()?,
            None => DistanceUnit::default(),
        };

        let gender: Gender = self.gender.parse()?;
        let profile = Profile::new(
            self.weight_kg,
            height_unit.to_cm(self.height),
            self.age_years,
            gender,
        )?;

        let input = PlanInput {
            profile,
            desired_weight_kg: self.desired_weight_kg,
            activity_level: self.activity_level.parse::<ActivityLevel>()?,
            goal: self.goal.parse::<Goal>()?,
            exercise_type: self.exercise_type.parse::<ExerciseType>()?,
        };

        Ok((input, distance_unit))
    }
}

/// Calculator response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: WeightLossPlan,
    /// Daily exercise distance in `distance_unit`
    pub distance_per_day: f64,
    pub distance_unit: DistanceUnit,
    pub height_cm: f64,
    /// Human-readable BMI category, e.g. "Normal/Healthy"
    pub bmi_description: String,
}

impl PlanResponse {
    pub fn new(plan: WeightLossPlan, distance_unit: DistanceUnit, height_cm: f64) -> Self {
        Self {
            distance_per_day: distance_unit.from_miles(plan.distance_per_day_miles),
            bmi_description: plan.bmi_category.description().to_string(),
            plan,
            distance_unit,
            height_cm,
        }
    }
}

// ============================================================================
// Progress Types
// ============================================================================

/// Client-held weight history to summarize
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProgressSummaryRequest {
    pub entries: Vec<ProgressEntry>,
    #[validate(range(exclusive_min = 0.0))]
    pub desired_weight_kg: f64,
}

/// Sorted history plus summary (absent when the history is empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummaryResponse {
    pub entries: Vec<ProgressEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProgressSummary>,
}
