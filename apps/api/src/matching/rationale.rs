//! Human-readable strings attached to each recommendation.

use crate::models::career::Career;

/// Builds the `why` string from the matched cluster and matched strengths.
pub fn build_why(matched_interests: &[String], matched_strengths: &[String]) -> String {
    let interest_part = if matched_interests.is_empty() {
        "no matching interests".to_string()
    } else {
        format!("interests ({})", matched_interests.join(", "))
    };
    let strength_part = if matched_strengths.is_empty() {
        "no matching strengths".to_string()
    } else {
        format!("strengths ({})", matched_strengths.join(", "))
    };
    format!("Matches your {interest_part} and {strength_part}")
}

/// Builds the `nextSteps` string from the career's subjects and pathways.
pub fn build_next_steps(career: &Career) -> String {
    format!(
        "Consider focusing on subjects {} and exploring pathways: {}.",
        career.suggested_subjects.join(", "),
        career.pathways.join(", ")
    )
}
