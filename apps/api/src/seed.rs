//! Catalogue seeding from the bundled JSON file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::career::Career;
use crate::store::CareerRepository;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogueError {
    #[error("career record {index} is missing a value for '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("career id '{0}' appears more than once")]
    DuplicateId(String),
}

/// One entry of the seed file, decoded field by field. Every field is required
/// (lists may be empty) and unknown keys are rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CareerRecord {
    career_id: String,
    name: String,
    cluster: String,
    required_skills: Vec<String>,
    suggested_subjects: Vec<String>,
    vet_options: Vec<String>,
    pathways: Vec<String>,
    job_outlook: String,
}

impl CareerRecord {
    fn into_career(self, index: usize) -> Result<Career, CatalogueError> {
        let required = [
            ("careerId", &self.career_id),
            ("name", &self.name),
            ("cluster", &self.cluster),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogueError::MissingField { index, field });
        }

        Ok(Career {
            career_id: self.career_id,
            name: self.name,
            cluster: self.cluster,
            required_skills: self.required_skills,
            suggested_subjects: self.suggested_subjects,
            vet_options: self.vet_options,
            pathways: self.pathways,
            job_outlook: self.job_outlook,
        })
    }
}

/// Parses and validates a JSON array of career records.
pub fn parse_catalogue(json: &str) -> Result<Vec<Career>> {
    let records: Vec<CareerRecord> =
        serde_json::from_str(json).context("Career catalogue is not a valid JSON array of careers")?;

    let mut seen = HashSet::new();
    let mut careers = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let career = record.into_career(index)?;
        if !seen.insert(career.career_id.clone()) {
            return Err(CatalogueError::DuplicateId(career.career_id).into());
        }
        careers.push(career);
    }
    Ok(careers)
}

/// Reads the catalogue file at `path`.
pub fn load_catalogue(path: &Path) -> Result<Vec<Career>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read career catalogue at {}", path.display()))?;
    parse_catalogue(&json).with_context(|| format!("Invalid career catalogue at {}", path.display()))
}

/// Seeds the store from `path` only when it holds no careers. Returns the number inserted.
pub async fn seed_if_empty(repo: &dyn CareerRepository, path: &Path) -> Result<u64> {
    let existing = repo.count_careers().await?;
    if existing > 0 {
        info!("Career catalogue already holds {existing} careers; skipping seed");
        return Ok(0);
    }

    let careers = load_catalogue(path)?;
    let inserted = repo.insert_careers(&careers).await?;
    info!("Seeded {inserted} careers from {}", path.display());
    Ok(inserted)
}
