use crate::models::job_template::JobTemplate;

pub const DEFAULT_TEMPLATE_TITLE: &str = "Software Engineer";

/// Template used when the caller names no job, or the named job is unknown.
pub fn default_job_template() -> JobTemplate {
    JobTemplate {
        title: DEFAULT_TEMPLATE_TITLE.to_string(),
        skills: [
            "JavaScript",
            "React",
            "Node.js",
            "API Development",
            "Git",
            "Problem Solving",
            "TypeScript",
            "AWS",
            "Docker",
            "CI/CD",
            "MongoDB",
            "Express",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        experience: [
            "Web application development",
            "Frontend development",
            "Backend development",
            "API integration",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        education: "Bachelor's degree in Computer Science or related field".to_string(),
        description: "Looking for a software engineer with strong JavaScript skills and \
            experience with modern web frameworks."
            .to_string(),
    }
}
