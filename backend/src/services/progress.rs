//! Progress tracking service
//!
//! The server holds no history; the client sends its weigh-ins and gets
//! back the ordered series and a summary.

use crate::error::ApiError;
use validator::Validate;
use weight_goal_shared::types::{ProgressSummaryRequest, ProgressSummaryResponse};
use weight_goal_shared::validation::validate_positive;
use weight_goal_shared::ProgressLog;

pub struct ProgressService;

impl ProgressService {
    pub fn summarize(req: ProgressSummaryRequest) -> Result<ProgressSummaryResponse, ApiError> {
        req.validate()?;
        for entry in &req.entries {
            validate_positive("Weight", entry.weight_kg).map_err(ApiError::Validation)?;
        }

        let log: ProgressLog = req.entries.into_iter().collect();
        Ok(ProgressSummaryResponse {
            summary: log.summary(req.desired_weight_kg),
            entries: log.entries().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weight_goal_shared::ProgressEntry;

    fn entry(day: u32, weight_kg: f64) -> ProgressEntry {
        ProgressEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            weight_kg,
        }
    }

    #[test]
    fn test_summarize_sorts_entries() {
        let response = ProgressService::summarize(ProgressSummaryRequest {
            entries: vec![entry(20, 78.0), entry(1, 80.0)],
            desired_weight_kg: 75.0,
        })
        .unwrap();

        assert_eq!(response.entries[0].weight_kg, 80.0);
        let summary = response.summary.unwrap();
        assert_eq!(summary.total_change_kg, -2.0);
        assert_eq!(summary.remaining_to_goal_kg, 3.0);
    }

    #[test]
    fn test_summarize_empty_history() {
        let response = ProgressService::summarize(ProgressSummaryRequest {
            entries: vec![],
            desired_weight_kg: 75.0,
        })
        .unwrap();
        assert!(response.entries.is_empty());
        assert!(response.summary.is_none());
    }

    #[test]
    fn test_summarize_rejects_zero_weight() {
        let err = ProgressService::summarize(ProgressSummaryRequest {
            entries: vec![entry(1, 0.0)],
            desired_weight_kg: 75.0,
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
