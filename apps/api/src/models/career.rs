use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalogue entry. Created once at seed time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub career_id: String,
    pub name: String,
    pub cluster: String,
    pub required_skills: Vec<String>,
    pub suggested_subjects: Vec<String>,
    pub vet_options: Vec<String>,
    pub pathways: Vec<String>,
    pub job_outlook: String,
}
