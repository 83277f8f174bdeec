use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Requirements a resume is scored against.
///
/// Absent list fields deserialize as empty, absent text fields as "".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobTemplate {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobTemplateRow {
    pub id: Uuid,
    pub title: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobTemplateRow> for JobTemplate {
    fn from(row: JobTemplateRow) -> Self {
        Self {
            title: row.title,
            skills: row.skills,
            experience: row.experience,
            education: row.education,
            description: row.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let template: JobTemplate = serde_json::from_str(r#"{"title": "Analyst"}"#).unwrap();
        assert_eq!(template.title, "Analyst");
        assert!(template.skills.is_empty());
        assert!(template.experience.is_empty());
        assert!(template.education.is_empty());
    }

    #[test]
    fn test_row_converts_to_template() {
        let row = JobTemplateRow {
            id: Uuid::new_v4(),
            title: "Data Engineer".to_string(),
            skills: vec!["SQL".to_string()],
            experience: vec!["Pipeline development".to_string()],
            education: "Degree".to_string(),
            description: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let template = JobTemplate::from(row);
        assert_eq!(template.title, "Data Engineer");
        assert_eq!(template.skills, vec!["SQL".to_string()]);
        assert_eq!(template.education, "Degree");
    }
}
