// Career matching engine.
// Implements: interest/strength overlap scoring, performance adjustment, ranking, rationale.
// Pure and synchronous: no database or network access happens in here.

pub mod engine;
pub mod rationale;
pub mod weights;

pub use engine::CareerMatcher;
pub use weights::MatchWeights;
