//! Rule-based career matcher.
//!
//! Algorithm, per career (full scan, no pruning):
//! 1. interest overlap = 1 if the career's cluster is one of the student's interests, else 0
//! 2. matched strengths = student strengths found in the career's required skills
//! 3. score = overlap / |interests| × interest weight
//!          + |matched strengths| / |strengths| × strength weight
//!          + performance modifier, clamped to [0, 1]
//! 4. rank by (confidence desc, name asc) and keep the top three
//!
//! An empty interests or strengths list counts as a denominator of 1. That only
//! avoids division by zero; it is not a meaningful normalization.

use std::cmp::Ordering;

use crate::matching::rationale::{build_next_steps, build_why};
use crate::matching::weights::MatchWeights;
use crate::models::career::Career;
use crate::models::profile::{Recommendation, StudentProfile};

/// Number of recommendations returned per request.
pub const TOP_N: usize = 3;

/// Intermediate per-career result before formatting.
#[derive(Debug, Clone)]
struct ScoredCareer<'a> {
    confidence: f64,
    career: &'a Career,
    matched_interests: Vec<String>,
    matched_strengths: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CareerMatcher {
    weights: MatchWeights,
}

impl CareerMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Scores every career and returns at most three recommendations.
    /// An empty catalogue yields an empty list.
    pub fn match_careers(
        &self,
        profile: &StudentProfile,
        careers: &[Career],
    ) -> Vec<Recommendation> {
        let mut scored: Vec<ScoredCareer<'_>> = careers
            .iter()
            .map(|career| self.score_career(profile, career))
            .collect();

        // Stable sort; ties on the rounded score fall back to name order.
        scored.sort_by(|a, b| {
            round_confidence(b.confidence)
                .partial_cmp(&round_confidence(a.confidence))
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.career.name.cmp(&b.career.name))
        });

        scored
            .into_iter()
            .take(TOP_N)
            .map(|s| Recommendation {
                career_id: s.career.career_id.clone(),
                name: s.career.name.clone(),
                cluster: s.career.cluster.clone(),
                confidence: round_confidence(s.confidence),
                why: build_why(&s.matched_interests, &s.matched_strengths),
                suggested_subjects: s.career.suggested_subjects.clone(),
                vet_options: s.career.vet_options.clone(),
                next_steps: build_next_steps(s.career),
            })
            .collect()
    }

    fn score_career<'a>(&self, profile: &StudentProfile, career: &'a Career) -> ScoredCareer<'a> {
        // A career carries a single cluster tag, so interest overlap is 0 or 1.
        let interest_overlap = profile.interests.contains(&career.cluster);
        let matched_interests = if interest_overlap {
            vec![career.cluster.clone()]
        } else {
            vec![]
        };

        let matched_strengths: Vec<String> = profile
            .strengths
            .iter()
            .filter(|s| career.required_skills.contains(*s))
            .cloned()
            .collect();

        let interests_score = f64::from(u8::from(interest_overlap))
            / denominator(profile.interests.len())
            * self.weights.interest;
        let strengths_score = matched_strengths.len() as f64
            / denominator(profile.strengths.len())
            * self.weights.strength;

        let raw_score = interests_score
            + strengths_score
            + self.weights.performance_modifier(&profile.academic_performance);

        ScoredCareer {
            confidence: raw_score.clamp(0.0, 1.0),
            career,
            matched_interests,
            matched_strengths,
        }
    }
}

/// Empty lists divide by 1 instead of 0.
fn denominator(len: usize) -> f64 {
    len.max(1) as f64
}

/// Rounds to two decimal places, half away from zero.
fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
