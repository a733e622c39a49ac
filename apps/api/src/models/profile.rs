use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Accepted values for `academicPerformance` at the HTTP boundary.
pub const ACADEMIC_PERFORMANCE_LEVELS: [&str; 3] = ["High", "Medium", "Low"];

/// The student's input when requesting recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub year_level: i32,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub academic_performance: String,
}

impl StudentProfile {
    /// Rejects profiles the scoring engine should never see.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.year_level < 1 {
            return Err(AppError::Validation(format!(
                "yearLevel must be at least 1, got {}",
                self.year_level
            )));
        }
        if !ACADEMIC_PERFORMANCE_LEVELS.contains(&self.academic_performance.as_str()) {
            return Err(AppError::Validation(format!(
                "academicPerformance must be one of {}, got '{}'",
                ACADEMIC_PERFORMANCE_LEVELS.join(", "),
                self.academic_performance
            )));
        }
        Ok(())
    }
}

/// A single ranked career returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub career_id: String,
    pub name: String,
    pub cluster: String,
    pub confidence: f64,
    pub why: String,
    pub suggested_subjects: Vec<String>,
    pub vet_options: Vec<String>,
    pub next_steps: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(year_level: i32, performance: &str) -> StudentProfile {
        StudentProfile {
            name: "Test Student".to_string(),
            year_level,
            interests: vec!["IT".to_string()],
            strengths: vec![],
            academic_performance: performance.to_string(),
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        for level in ACADEMIC_PERFORMANCE_LEVELS {
            assert!(profile(10, level).validate().is_ok());
        }
    }

    #[test]
    fn test_year_level_below_one_rejected() {
        let err = profile(0, "High").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("yearLevel")));
    }

    #[test]
    fn test_unknown_performance_rejected() {
        let err = profile(10, "Excellent").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Excellent")));
    }

    #[test]
    fn test_performance_check_is_case_sensitive() {
        assert!(profile(10, "high").validate().is_err());
    }

    #[test]
    fn test_profile_decodes_camel_case() {
        let profile: StudentProfile = serde_json::from_value(json!({
            "name": "Ava",
            "yearLevel": 11,
            "interests": ["IT", "STEM"],
            "strengths": ["Problem-Solving"],
            "academicPerformance": "Medium"
        }))
        .unwrap();
        assert_eq!(profile.year_level, 11);
        assert_eq!(profile.interests, vec!["IT", "STEM"]);
        assert_eq!(profile.academic_performance, "Medium");
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = Recommendation {
            career_id: "CR001".to_string(),
            name: "Software Developer".to_string(),
            cluster: "IT".to_string(),
            confidence: 0.55,
            why: "Matches your interests (IT) and no matching strengths".to_string(),
            suggested_subjects: vec!["Digital Technologies".to_string()],
            vet_options: vec![],
            next_steps: "Consider focusing on subjects Digital Technologies and exploring pathways: .".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["careerId"], "CR001");
        assert_eq!(value["nextSteps"], rec.next_steps);
        assert!(value.get("suggestedSubjects").is_some());
        assert!(value.get("vetOptions").is_some());
    }
}
