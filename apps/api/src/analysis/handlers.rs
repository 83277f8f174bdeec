//! Axum route handler for resume analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::extract::{extract_resume_text, is_pdf_upload};
use crate::analysis::scoring::AnalysisResult;
use crate::errors::AppError;
use crate::job_templates::store::resolve_template;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_TITLE_FIELD: &str = "jobTitle";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analyzer: &'static str,
    pub job_title: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Parts of the upload form this handler cares about.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<Bytes>,
    job_title: Option<String>,
}

/// POST /analyze
///
/// Multipart form: `resume` (PDF file, required) and `jobTitle` (optional).
/// Extracts text, resolves the job template, and scores the resume.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let pdf = form
        .resume
        .ok_or_else(|| AppError::Validation("No resume uploaded".to_string()))?;

    let resume_text = extract_resume_text(pdf).await?;
    let template = resolve_template(&state.db, form.job_title.as_deref()).await;

    let result = state.analyzer.analyze(&resume_text, &template).await?;
    info!(
        job_title = %template.title,
        overall_score = result.overall_score,
        analyzer = state.analyzer.backend(),
        "Resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analyzer: state.analyzer.backend(),
        job_title: template.title,
        result,
    }))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                if !is_pdf_upload(field.content_type(), field.file_name()) {
                    return Err(AppError::Validation(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
                form.resume = Some(data);
            }
            Some(JOB_TITLE_FIELD) => {
                let title = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid jobTitle: {e}")))?;
                form.job_title = Some(title);
            }
            _ => {}
        }
    }

    Ok(form)
}
