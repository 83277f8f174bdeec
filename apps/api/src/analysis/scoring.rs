//! Resume scoring — pluggable, trait-based analyzer that measures resume text
//! against a job template.
//!
//! Default (and only) backend: `KeywordAnalyzer`, a pure substring heuristic.
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so a model-backed analyzer
//! can be slotted in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::matching::{experience_matches, has_education, skill_matches};
use crate::errors::AppError;
use crate::models::job_template::JobTemplate;

const OVERALL_FLOOR: u32 = 25;
const REQUIREMENTS_FLOOR: u32 = 20;
const KEYWORDS_FLOOR: u32 = 30;
const KEYWORDS_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

const MAX_SKILLS_MISSING: usize = 8;
const MAX_EXPERIENCE_MISSING: usize = 5;
const MAX_SUGGESTIONS: usize = 5;
const MISSING_SKILLS_NAMED: usize = 3;

const SUGGEST_PROJECTS: &str =
    "Highlight relevant project experience that demonstrates your technical expertise.";
const SUGGEST_EDUCATION: &str = "Include your educational background or relevant certifications.";
const SUGGEST_METRICS: &str = "Quantify your achievements with specific metrics and results.";
const SUGGEST_KEYWORDS: &str = "Use industry-specific keywords throughout your resume.";

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full analysis of one resume against one job template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u32,      // 25 – 100
    pub requirements_score: u32, // 20 – 100
    pub keywords_score: u32,     // 30 – 100
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>, // first 8
    pub experience_matched: Vec<String>,
    pub experience_missing: Vec<String>, // first 5
    pub education_match: bool,
    pub suggestions: Vec<String>, // at most 5, by priority
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching the handler.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    /// Short label reported to clients ("keyword").
    fn backend(&self) -> &'static str;

    async fn analyze(
        &self,
        resume_text: &str,
        template: &JobTemplate,
    ) -> Result<AnalysisResult, AppError>;
}

/// Deterministic keyword analyzer. Never fails, never touches the network.
pub struct KeywordAnalyzer;

#[async_trait]
impl ResumeAnalyzer for KeywordAnalyzer {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    async fn analyze(
        &self,
        resume_text: &str,
        template: &JobTemplate,
    ) -> Result<AnalysisResult, AppError> {
        Ok(analyze_keywords(resume_text, template))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` against `template`.
///
/// Algorithm:
/// 1. Partition skills by variant substring match, experience phrases by
///    any word longer than three characters.
/// 2. skills% and experience% = round(matched / max(total, 1) × 100);
///    overall = round of their mean.
/// 3. Floors: overall ≥ 25, requirements (skills%) ≥ 20,
///    keywords (skills% + 10) ≥ 30, all capped at 100.
/// 4. Education is a vocabulary check on the resume only.
pub fn analyze_keywords(resume_text: &str, template: &JobTemplate) -> AnalysisResult {
    let resume_lower = resume_text.to_lowercase();

    let (skills_matched, skills_missing): (Vec<String>, Vec<String>) = template
        .skills
        .iter()
        .cloned()
        .partition(|skill| skill_matches(skill, &resume_lower));

    let (experience_matched, experience_missing): (Vec<String>, Vec<String>) = template
        .experience
        .iter()
        .cloned()
        .partition(|phrase| experience_matches(phrase, &resume_lower));

    let skills_score = percentage(skills_matched.len(), template.skills.len());
    let experience_score = percentage(experience_matched.len(), template.experience.len());
    let overall_score = ((skills_score + experience_score) as f64 / 2.0).round() as u32;

    let education_match = has_education(&resume_lower);

    let suggestions = build_suggestions(
        &skills_missing,
        &experience_missing,
        education_match,
        &template.education,
    );

    AnalysisResult {
        overall_score: overall_score.clamp(OVERALL_FLOOR, MAX_SCORE),
        requirements_score: skills_score.clamp(REQUIREMENTS_FLOOR, MAX_SCORE),
        keywords_score: (skills_score + KEYWORDS_BONUS).clamp(KEYWORDS_FLOOR, MAX_SCORE),
        skills_matched,
        skills_missing: truncated(skills_missing, MAX_SKILLS_MISSING),
        experience_matched,
        experience_missing: truncated(experience_missing, MAX_EXPERIENCE_MISSING),
        education_match,
        suggestions,
    }
}

/// round(matched / max(total, 1) × 100), in that order of operations.
fn percentage(matched: usize, total: usize) -> u32 {
    ((matched as f64 / total.max(1) as f64) * 100.0).round() as u32
}

fn truncated(mut items: Vec<String>, max: usize) -> Vec<String> {
    items.truncate(max);
    items
}

/// Builds the prioritized suggestion list, at most five entries.
fn build_suggestions(
    skills_missing: &[String],
    experience_missing: &[String],
    education_match: bool,
    education_requirement: &str,
) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

    if !skills_missing.is_empty() {
        let top_missing: Vec<&str> = skills_missing
            .iter()
            .take(MISSING_SKILLS_NAMED)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding experience with {} to better match the job requirements.",
            top_missing.join(", ")
        ));
    }
    if !experience_missing.is_empty() {
        suggestions.push(SUGGEST_PROJECTS.to_string());
    }
    if !education_match && !education_requirement.is_empty() {
        suggestions.push(SUGGEST_EDUCATION.to_string());
    }
    suggestions.push(SUGGEST_METRICS.to_string());
    suggestions.push(SUGGEST_KEYWORDS.to_string());

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
