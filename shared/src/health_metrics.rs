//! Health metrics calculations module
//!
//! Provides the calculator formulas: BMR (revised Harris-Benedict), TDEE,
//! goal-adjusted calorie intake, exercise distance, time to goal and BMI.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Parse at the Boundary**: Free-form strings become enums via `FromStr`;
//!    the formulas only ever see recognized values
//! 3. **SI Inside**: Weights in kg, heights in cm

use crate::errors::CalculationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Energy stored in one kilogram of body mass (kcal)
pub const KCAL_PER_KG: f64 = 7700.0;

/// Daily calorie adjustment applied for the lose/gain goals (kcal)
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Normalize a form choice such as "Lightly Active" to "lightly_active"
fn normalize_choice(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

// ============================================================================
// Profile Types
// ============================================================================

/// Gender used by the BMR equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CalculationError::invalid("Invalid gender")),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(CalculationError::invalid(format!(
                "Invalid activity level: {}",
                s
            ))),
        }
    }
}

/// Weight goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl Goal {
    /// Daily calorie adjustment relative to TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::LoseWeight => -GOAL_ADJUSTMENT_KCAL,
            Goal::MaintainWeight => 0.0,
            Goal::GainWeight => GOAL_ADJUSTMENT_KCAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::MaintainWeight => "maintain_weight",
            Goal::GainWeight => "gain_weight",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "lose_weight" => Ok(Goal::LoseWeight),
            "maintain_weight" => Ok(Goal::MaintainWeight),
            "gain_weight" => Ok(Goal::GainWeight),
            _ => Err(CalculationError::invalid(format!("Invalid goal: {}", s))),
        }
    }
}

/// Exercise used to burn the daily deficit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    #[default]
    Walking,
    Running,
}

impl ExerciseType {
    /// Average steps per mile
    pub fn steps_per_mile(&self) -> f64 {
        match self {
            ExerciseType::Walking => 2000.0,
            ExerciseType::Running => 1500.0,
        }
    }

    /// Calories burned per step
    pub fn calories_per_step(&self) -> f64 {
        match self {
            ExerciseType::Walking => 0.05,
            ExerciseType::Running => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Walking => "walking",
            ExerciseType::Running => "running",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "walking" | "walk" => Ok(ExerciseType::Walking),
            "running" | "run" => Ok(ExerciseType::Running),
            _ => Err(CalculationError::invalid(format!(
                "Invalid exercise type: {}",
                s
            ))),
        }
    }
}

/// Biometric profile for a single calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
}

impl Profile {
    /// Build a profile, rejecting non-positive or non-finite measurements
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        gender: Gender,
    ) -> Result<Self, CalculationError> {
        for (name, value) in [
            ("weight", weight_kg),
            ("height", height_cm),
            ("age", age_years),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalculationError::invalid(format!(
                    "{} must be a positive number",
                    name
                )));
            }
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            gender,
        })
    }

    pub fn bmr(&self) -> f64 {
        bmr(self.weight_kg, self.height_cm, self.age_years, self.gender)
    }

    pub fn bmi(&self) -> f64 {
        bmi(self.weight_kg, self.height_cm)
    }
}

// ============================================================================
// Energy Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Target daily calorie intake for a goal
pub fn calorie_intake(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.calorie_adjustment()
}

/// Miles to cover per day to burn `calories_to_burn`
///
/// `calories_per_step` must be non-zero; the per-exercise constants always are.
pub fn exercise_distance(calories_to_burn: f64, steps_per_mile: f64, calories_per_step: f64) -> f64 {
    let steps_per_day = calories_to_burn / calories_per_step;
    steps_per_day / steps_per_mile
}

/// Days needed to burn `total_calories_to_burn` at `daily_deficit` per day
///
/// Callers must ensure `daily_deficit > 0`.
pub fn days_to_goal(total_calories_to_burn: f64, daily_deficit: f64) -> f64 {
    total_calories_to_burn / daily_deficit
}

/// Total calories to burn to move from `current_weight_kg` to `desired_weight_kg`
///
/// Zero or negative when the desired weight is not below the current one.
pub fn calories_to_reach(current_weight_kg: f64, desired_weight_kg: f64) -> f64 {
    (current_weight_kg - desired_weight_kg) * KCAL_PER_KG
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_male() {
        // 88.362 + 937.79 + 839.825 - 170.31
        let value = bmr(70.0, 175.0, 30.0, Gender::Male);
        assert!((value - 1695.667).abs() < 0.01);
    }

    #[test]
    fn test_bmr_female() {
        // 447.593 + 554.82 + 511.17 - 129.9
        let value = bmr(60.0, 165.0, 30.0, Gender::Female);
        assert!((value - 1383.683).abs() < 0.01);
    }

    #[test]
    fn test_tdee_sedentary() {
        assert!((tdee(1705.05, ActivityLevel::Sedentary) - 2046.06).abs() < 0.01);
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1.2)]
    #[case(ActivityLevel::LightlyActive, 1.375)]
    #[case(ActivityLevel::ModeratelyActive, 1.55)]
    #[case(ActivityLevel::VeryActive, 1.725)]
    #[case(ActivityLevel::ExtraActive, 1.9)]
    fn test_activity_multipliers(#[case] level: ActivityLevel, #[case] expected: f64) {
        assert_eq!(level.multiplier(), expected);
        assert!((tdee(1000.0, level) - 1000.0 * expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(Goal::LoseWeight, 1546.06)]
    #[case(Goal::MaintainWeight, 2046.06)]
    #[case(Goal::GainWeight, 2546.06)]
    fn test_calorie_intake(#[case] goal: Goal, #[case] expected: f64) {
        assert!((calorie_intake(2046.06, goal) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_maintain_has_no_deficit() {
        let t = tdee(1705.05, ActivityLevel::Sedentary);
        assert_eq!(t - calorie_intake(t, Goal::MaintainWeight), 0.0);
    }

    // =========================================================================
    // Exercise and Time-to-Goal Tests
    // =========================================================================

    #[test]
    fn test_exercise_distance_walking() {
        let walk = ExerciseType::Walking;
        // 500 kcal / 0.05 = 10000 steps = 5 miles
        let miles = exercise_distance(500.0, walk.steps_per_mile(), walk.calories_per_step());
        assert!((miles - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_exercise_distance_running() {
        let run = ExerciseType::Running;
        // 600 kcal / 0.1 = 6000 steps = 4 miles
        let miles = exercise_distance(600.0, run.steps_per_mile(), run.calories_per_step());
        assert!((miles - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_days_to_goal() {
        let total = calories_to_reach(80.0, 75.0);
        assert_eq!(total, 38500.0);
        assert!((days_to_goal(total, 500.0) - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_days_to_goal_negative_when_desired_is_higher() {
        let total = calories_to_reach(70.0, 72.0);
        assert!(days_to_goal(total, 500.0) < 0.0);
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 175cm -> BMI ~22.86
        assert!((bmi(70.0, 175.0) - 22.857).abs() < 0.01);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(22.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(27.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(32.0), BmiCategory::ObeseClass1);
        assert_eq!(classify_bmi(37.0), BmiCategory::ObeseClass2);
        assert_eq!(classify_bmi(42.0), BmiCategory::ObeseClass3);
    }

    // =========================================================================
    // Parsing Tests
    // =========================================================================

    #[rstest]
    #[case("sedentary", ActivityLevel::Sedentary)]
    #[case("Lightly Active", ActivityLevel::LightlyActive)]
    #[case("moderately_active", ActivityLevel::ModeratelyActive)]
    #[case("VERY ACTIVE", ActivityLevel::VeryActive)]
    #[case(" Extra Active ", ActivityLevel::ExtraActive)]
    fn test_parse_activity_level(#[case] input: &str, #[case] expected: ActivityLevel) {
        assert_eq!(input.parse::<ActivityLevel>().unwrap(), expected);
    }

    #[rstest]
    #[case("Lose Weight", Goal::LoseWeight)]
    #[case("maintain_weight", Goal::MaintainWeight)]
    #[case("gain weight", Goal::GainWeight)]
    fn test_parse_goal(#[case] input: &str, #[case] expected: Goal) {
        assert_eq!(input.parse::<Goal>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!(matches!(
            "other".parse::<Gender>(),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            "couch_potato".parse::<ActivityLevel>(),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            "bulk".parse::<Goal>(),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            "swimming".parse::<ExerciseType>(),
            Err(CalculationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_profile_rejects_non_positive_values() {
        assert!(Profile::new(70.0, 175.0, 30.0, Gender::Male).is_ok());
        assert!(Profile::new(0.0, 175.0, 30.0, Gender::Male).is_err());
        assert!(Profile::new(70.0, -1.0, 30.0, Gender::Male).is_err());
        assert!(Profile::new(70.0, 175.0, f64::NAN, Gender::Female).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            prop_assert!(bmi(weight2, height) > bmi(weight1, height));
        }

        /// Property: Taller height = lower BMI (same weight)
        #[test]
        fn prop_bmi_decreases_with_height(
            weight in 60.0f64..100.0,
            height1 in 150.0f64..170.0,
            height2 in 180.0f64..200.0
        ) {
            prop_assert!(bmi(weight, height1) > bmi(weight, height2));
        }

        /// Property: Same inputs always give the same outputs
        #[test]
        fn prop_formulas_are_idempotent(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18.0f64..80.0
        ) {
            prop_assert_eq!(bmr(weight, height, age, Gender::Female), bmr(weight, height, age, Gender::Female));
            prop_assert_eq!(bmi(weight, height), bmi(weight, height));
            let b = bmr(weight, height, age, Gender::Male);
            prop_assert_eq!(tdee(b, ActivityLevel::VeryActive), tdee(b, ActivityLevel::VeryActive));
        }

        /// Property: TDEE > BMR (activity multiplier > 1)
        #[test]
        fn prop_tdee_greater_than_bmr(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20.0f64..60.0
        ) {
            let b = bmr(weight, height, age, Gender::Male);
            prop_assert!(tdee(b, ActivityLevel::Sedentary) > b);
        }

        /// Property: Running covers the deficit in fewer miles than walking
        #[test]
        fn prop_running_needs_fewer_miles(deficit in 1.0f64..2000.0) {
            let walk = ExerciseType::Walking;
            let run = ExerciseType::Running;
            let walked = exercise_distance(deficit, walk.steps_per_mile(), walk.calories_per_step());
            let ran = exercise_distance(deficit, run.steps_per_mile(), run.calories_per_step());
            prop_assert!(ran < walked);
        }

        /// Property: Display form parses back to the same value
        #[test]
        fn prop_activity_display_roundtrip(idx in 0usize..5) {
            let levels = [
                ActivityLevel::Sedentary,
                ActivityLevel::LightlyActive,
                ActivityLevel::ModeratelyActive,
                ActivityLevel::VeryActive,
                ActivityLevel::ExtraActive,
            ];
            let level = levels[idx];
            prop_assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
        }
    }
}
