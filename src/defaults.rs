//! The resume shown when no resume file is found.

/// Built-in resume in the plain-text format.
pub const DEFAULT_RESUME: &str = include_str!("../assets/default_resume.txt");
