//! Axum route handlers for the Job Template API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::job_templates::store::{list_templates, upsert_template, UpsertParams};
use crate::models::job_template::JobTemplateRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertTemplateRequest {
    #[serde(default)]
    pub title: String,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub education: Option<String>,
    pub description: Option<String>,
}

impl UpsertTemplateRequest {
    /// Empty strings count as "not provided" so an update never blanks
    /// the stored education or description. Lists are taken as given.
    fn params(&self) -> Result<UpsertParams<'_>, AppError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Job title is required".to_string()));
        }

        Ok(UpsertParams {
            title,
            skills: self.skills.as_deref(),
            experience: self.experience.as_deref(),
            education: non_empty(self.education.as_deref()),
            description: non_empty(self.description.as_deref()),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// POST /job-templates
///
/// Creates the template or updates the one with the same title.
pub async fn handle_upsert_template(
    State(state): State<AppState>,
    Json(request): Json<UpsertTemplateRequest>,
) -> Result<(StatusCode, Json<JobTemplateRow>), AppError> {
    let params = request.params()?;
    let row = upsert_template(&state.db, params).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /job-templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobTemplateRow>>, AppError> {
    let rows = list_templates(&state.db).await?;
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> UpsertTemplateRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_title_is_validation_error() {
        let req = request(r#"{"skills": ["Rust"]}"#);
        assert!(matches!(req.params(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_title_is_validation_error() {
        let req = request(r#"{"title": "   "}"#);
        assert!(matches!(req.params(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_params_keep_absent_fields_unset() {
        let req = request(r#"{"title": " Data Engineer ", "skills": ["SQL", "Spark"]}"#);
        let params = req.params().unwrap();
        assert_eq!(params.title, "Data Engineer");
        assert_eq!(params.skills.map(|s| s.len()), Some(2));
        assert!(params.experience.is_none());
        assert!(params.education.is_none());
    }

    #[test]
    fn test_empty_strings_do_not_overwrite() {
        let req = request(r#"{"title": "QA", "education": "", "description": ""}"#);
        let params = req.params().unwrap();
        assert!(params.education.is_none());
        assert!(params.description.is_none());
    }

    #[test]
    fn test_empty_list_is_kept_as_explicit_value() {
        let req = request(r#"{"title": "QA", "experience": []}"#);
        let params = req.params().unwrap();
        assert_eq!(params.experience.map(|e| e.len()), Some(0));
    }
}
