//! Weight loss plan computation
//!
//! Runs the calculator end to end for one request: energy expenditure,
//! calorie target, deficit check, exercise distance, time to goal and BMI.

use crate::errors::CalculationError;
use crate::health_metrics::{
    calorie_intake, calories_to_reach, classify_bmi, days_to_goal, exercise_distance, tdee,
    ActivityLevel, BmiCategory, ExerciseType, Goal, Profile,
};
use serde::{Deserialize, Serialize};

/// Upper bound on daily energy expenditure; above it the 500 kcal goal
/// adjustment is no longer exact in `f64`
const MAX_ENERGY_KCAL: f64 = 1e12;

/// Everything the calculator needs for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub profile: Profile,
    pub desired_weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub exercise_type: ExerciseType,
}

/// Calculator result bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLossPlan {
    pub bmr: f64,
    pub tdee: f64,
    /// Recommended daily calorie intake
    pub calorie_intake: f64,
    pub calories_to_burn_per_day: f64,
    pub distance_per_day_miles: f64,
    /// May be zero or negative when the desired weight is not below the current one
    pub days_to_goal: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Compute the plan, failing with `NoDeficit` unless the goal implies a
/// positive daily caloric deficit
///
/// Measurements that push energy expenditure past `MAX_ENERGY_KCAL`, or
/// BMI past `f64` range, are rejected as `InvalidInput`.
pub fn compute_plan(input: &PlanInput) -> Result<WeightLossPlan, CalculationError> {
    let profile = &input.profile;
    let bmr = profile.bmr();
    let tdee = tdee(bmr, input.activity_level);
    if !(tdee.is_finite() && tdee < MAX_ENERGY_KCAL) {
        return Err(CalculationError::invalid(
            "Measurements are out of range for the energy calculation",
        ));
    }
    let intake = calorie_intake(tdee, input.goal);

    // Written so that NaN also fails the check
    let deficit = tdee - intake;
    if !(deficit > 0.0 && deficit.is_finite()) {
        return Err(CalculationError::NoDeficit);
    }

    let exercise = input.exercise_type;
    let distance = exercise_distance(
        deficit,
        exercise.steps_per_mile(),
        exercise.calories_per_step(),
    );
    let days = days_to_goal(
        calories_to_reach(profile.weight_kg, input.desired_weight_kg),
        deficit,
    );
    let bmi = profile.bmi();
    if !bmi.is_finite() {
        return Err(CalculationError::invalid("Height is out of range for BMI"));
    }

    Ok(WeightLossPlan {
        bmr,
        tdee,
        calorie_intake: intake,
        calories_to_burn_per_day: deficit,
        distance_per_day_miles: distance,
        days_to_goal: days,
        bmi,
        bmi_category: classify_bmi(bmi),
    })
}
