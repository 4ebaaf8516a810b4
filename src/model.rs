//! # Module: Wire Model
//!
//! ## Responsibility
//! Serde types for the two JSON exchanges with the backend. Field names and
//! casing are part of the backend contract and are kept verbatim.
//!
//! ## Guarantees
//! - Every type lives for one page session at most; nothing is persisted
//! - Numeric fields accept both JSON integers and floats where the backend
//!   may emit either (e.g. an empty-table average of `0`)
//!
//! ## NOT Responsible For
//! - Scoring or aggregation (backend)
//! - Form parsing (that belongs to `assessment::form`)

use serde::{Deserialize, Serialize};

/// One user's health metrics, built fresh from the form on each submit.
///
/// Serialized as the `POST /analyze` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubmission {
    /// Display name used in the result title.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Body-mass index.
    pub bmi: f64,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: u32,
    /// Fasting blood sugar in mg/dL.
    pub blood_sugar: u32,
    /// Smoking status from the radio choice.
    pub is_smoker: bool,
}

/// Per-condition risk scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Overall metabolic-syndrome score; drives the status banner.
    pub metabolic: f64,
    /// Hypertension score.
    pub hypertension: f64,
    /// Diabetes score.
    pub diabetes: f64,
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Condition scores.
    pub scores: Scores,
    /// Human-readable risk factors, possibly empty.
    pub factors: Vec<String>,
    /// Recommendations; may embed `**bold**` spans.
    pub recommendations: Vec<String>,
}

/// Response body of `GET /dashboard-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of stored assessments.
    pub total_users: u64,
    /// Mean metabolic score across all assessments.
    pub avg_metabolic_score: f64,
    /// Mean age across all assessments.
    pub avg_age: f64,
    /// Users per age bracket.
    pub age_dist: AgeDistribution,
    /// Smoker versus non-smoker counts.
    pub smoker_dist: SmokerDistribution,
    /// Per-user BMI and metabolic score, as parallel arrays.
    pub risk_correlation: RiskCorrelation,
}

/// Categorical age histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    /// Bracket labels, e.g. `"30대"`.
    pub labels: Vec<String>,
    /// Count per bracket, parallel to `labels`.
    pub data: Vec<f64>,
}

/// Two-way smoking split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokerDistribution {
    /// Users who do not smoke.
    pub non_smokers: u64,
    /// Users who smoke.
    pub smokers: u64,
}

/// Parallel arrays, one entry per stored assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCorrelation {
    /// BMI values.
    pub bmi: Vec<f64>,
    /// Metabolic scores, same length as `bmi`.
    pub metabolic_score: Vec<f64>,
}

impl RiskCorrelation {
    /// Pairs `bmi[i]` with `metabolic_score[i]`.
    ///
    /// The backend guarantees equal lengths; should they differ, pairing
    /// stops at the shorter array.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.bmi
            .iter()
            .copied()
            .zip(self.metabolic_score.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_serializes_contract_field_names() {
        let sub = UserSubmission {
            name: "Kim".into(),
            age: 45,
            bmi: 28.5,
            systolic_bp: 135,
            blood_sugar: 110,
            is_smoker: true,
        };
        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Kim",
                "age": 45,
                "bmi": 28.5,
                "systolic_bp": 135,
                "blood_sugar": 110,
                "is_smoker": true
            })
        );
    }

    #[test]
    fn test_assessment_result_parses_backend_shape() {
        let body = r#"{
            "scores": {"metabolic": 72, "hypertension": 55.5, "diabetes": 30},
            "factors": ["High BMI"],
            "recommendations": ["**Reduce** sugar intake"]
        }"#;
        let result: AssessmentResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.scores.metabolic, 72.0);
        assert_eq!(result.scores.hypertension, 55.5);
        assert_eq!(result.factors, vec!["High BMI".to_string()]);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_assessment_result_missing_scores_is_rejected() {
        let body = r#"{"factors": [], "recommendations": []}"#;
        assert!(serde_json::from_str::<AssessmentResult>(body).is_err());
    }

    #[test]
    fn test_dashboard_summary_accepts_integer_averages() {
        let body = json!({
            "total_users": 0,
            "avg_metabolic_score": 0,
            "avg_age": 0,
            "age_dist": {"labels": ["20대 이하", "30대"], "data": [0, 0]},
            "smoker_dist": {"smokers": 0, "non_smokers": 0},
            "risk_correlation": {"bmi": [], "metabolic_score": []}
        });
        let summary: DashboardSummary = serde_json::from_value(body).unwrap();
        assert_eq!(summary.avg_metabolic_score, 0.0);
        assert_eq!(summary.age_dist.labels.len(), 2);
    }

    #[test]
    fn test_correlation_points_pair_by_index() {
        let corr = RiskCorrelation {
            bmi: vec![22.0, 31.5],
            metabolic_score: vec![10.0, 80.0],
        };
        assert_eq!(corr.points(), vec![(22.0, 10.0), (31.5, 80.0)]);
    }

    #[test]
    fn test_correlation_points_mismatched_lengths_do_not_panic() {
        let corr = RiskCorrelation {
            bmi: vec![22.0, 31.5, 40.0],
            metabolic_score: vec![10.0],
        };
        assert_eq!(corr.points(), vec![(22.0, 10.0)]);
    }
}
