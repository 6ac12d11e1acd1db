//! Weight Goal Calculator WASM Module
//!
//! Browser bindings for the calculator. All formulas live in
//! `weight-goal-shared`; this crate only adapts arguments and results to
//! JavaScript-friendly shapes.

use wasm_bindgen::prelude::*;
use weight_goal_shared::health_metrics::{self, ActivityLevel, Gender};
use weight_goal_shared::types::{CalculateRequest, PlanResponse};
use weight_goal_shared::validation::validate_positive;
use weight_goal_shared::{compute_plan, CalculationError, ErrorDetail, ErrorResponse};

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::bmi(weight_kg, height_cm)
}

/// Calculate BMR (Harris-Benedict, revised)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, is_male: bool) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    health_metrics::bmr(weight_kg, height_cm, age_years, gender)
}

/// Calculate TDEE from a BMR and an activity level label such as
/// "Lightly Active" or "very_active"
#[wasm_bindgen]
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> Result<f64, JsValue> {
    tdee_for(bmr, activity_level).map_err(|e| JsValue::from_str(&e))
}

/// Run the full calculator on a JSON-encoded request
///
/// Returns the JSON-encoded plan, or a JSON error body with code
/// `VALIDATION_ERROR` or `NO_DEFICIT`.
#[wasm_bindgen]
pub fn calculate_plan(request_json: &str) -> Result<String, JsValue> {
    plan_json(request_json).map_err(|e| JsValue::from_str(&e))
}

fn tdee_for(bmr: f64, activity_level: &str) -> Result<f64, String> {
    let level: ActivityLevel = activity_level.parse().map_err(|e| format!("{}", e))?;
    Ok(health_metrics::tdee(bmr, level))
}

fn plan_json(request_json: &str) -> Result<String, String> {
    let req: CalculateRequest = serde_json::from_str(request_json)
        .map_err(|e| error_json("VALIDATION_ERROR", e.to_string()))?;
    validate_positive("Desired weight", req.desired_weight_kg)
        .map_err(|e| error_json("VALIDATION_ERROR", e))?;

    let (input, distance_unit) = req
        .to_plan_input()
        .map_err(|e| error_json("VALIDATION_ERROR", e.to_string()))?;
    let plan = compute_plan(&input).map_err(|e| {
        let code = match e {
            CalculationError::NoDeficit => "NO_DEFICIT",
            CalculationError::InvalidInput(_) => "VALIDATION_ERROR",
        };
        error_json(code, e.to_string())
    })?;

    let response = PlanResponse::new(plan, distance_unit, input.profile.height_cm);
    serde_json::to_string(&response).map_err(|e| e.to_string())
}

fn error_json(code: &str, message: String) -> String {
    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message,
            field: None,
        },
    };
    serde_json::to_string(&body).unwrap_or_else(|_| body.error.message)
}
