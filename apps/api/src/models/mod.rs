pub mod job_template;
