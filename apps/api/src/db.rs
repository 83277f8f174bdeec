use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const JOB_TEMPLATES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS job_templates (
    id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title       TEXT NOT NULL UNIQUE,
    skills      TEXT[] NOT NULL DEFAULT '{}',
    experience  TEXT[] NOT NULL DEFAULT '{}',
    education   TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the job template table if this is a fresh database.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(JOB_TEMPLATES_SCHEMA)
        .execute(pool)
        .await
        .context("Failed to create job_templates table")?;
    info!("Database schema ready");
    Ok(())
}
