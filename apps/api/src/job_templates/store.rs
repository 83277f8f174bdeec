//! PostgreSQL persistence for job templates.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::job_templates::defaults::default_job_template;
use crate::models::job_template::{JobTemplate, JobTemplateRow};

/// Fields for a create-or-update. `None` keeps the stored value on update
/// and falls back to empty on create.
#[derive(Debug)]
pub struct UpsertParams<'a> {
    pub title: &'a str,
    pub skills: Option<&'a [String]>,
    pub experience: Option<&'a [String]>,
    pub education: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Creates the template named `params.title`, or updates it in place.
pub async fn upsert_template(
    pool: &PgPool,
    params: UpsertParams<'_>,
) -> sqlx::Result<JobTemplateRow> {
    let row = sqlx::query_as::<_, JobTemplateRow>(
        r#"
        INSERT INTO job_templates (title, skills, experience, education, description)
        VALUES ($1, COALESCE($2, '{}'::text[]), COALESCE($3, '{}'::text[]),
                COALESCE($4, ''), COALESCE($5, ''))
        ON CONFLICT (title) DO UPDATE SET
            skills = COALESCE($2, job_templates.skills),
            experience = COALESCE($3, job_templates.experience),
            education = COALESCE($4, job_templates.education),
            description = COALESCE($5, job_templates.description),
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(params.title)
    .bind(params.skills)
    .bind(params.experience)
    .bind(params.education)
    .bind(params.description)
    .fetch_one(pool)
    .await?;

    info!(title = %row.title, id = %row.id, "Job template saved");
    Ok(row)
}

/// All stored templates, ordered by title.
pub async fn list_templates(pool: &PgPool) -> sqlx::Result<Vec<JobTemplateRow>> {
    let rows = sqlx::query_as::<_, JobTemplateRow>("SELECT * FROM job_templates ORDER BY title")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// First template (by title) whose title contains `query`, ignoring case.
/// Plain substring search: `query` is never interpreted as a pattern.
pub async fn find_template_by_title(
    pool: &PgPool,
    query: &str,
) -> sqlx::Result<Option<JobTemplateRow>> {
    let row = sqlx::query_as::<_, JobTemplateRow>(
        r#"
        SELECT * FROM job_templates
        WHERE strpos(lower(title), lower($1)) > 0
        ORDER BY title
        LIMIT 1
        "#,
    )
    .bind(query)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Resolves the template to score against. Never fails: an absent title, an
/// unknown title, or a store error all fall back to the default template.
pub async fn resolve_template(pool: &PgPool, job_title: Option<&str>) -> JobTemplate {
    let Some(query) = requested_title(job_title) else {
        return default_job_template();
    };

    match find_template_by_title(pool, query).await {
        Ok(Some(row)) => row.into(),
        Ok(None) => {
            info!(query, "No job template matched, using default");
            default_job_template()
        }
        Err(e) => {
            warn!("Job template lookup failed, using default: {e:?}");
            default_job_template()
        }
    }
}

/// Trims the requested title; blank means "not requested".
fn requested_title(job_title: Option<&str>) -> Option<&str> {
    job_title.map(str::trim).filter(|t| !t.is_empty())
}
