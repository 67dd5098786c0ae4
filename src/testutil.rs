//! Test utilities for setting up resume fixtures.
//!
//! This module provides a `TestFixture` builder for creating an isolated data
//! directory, plus a small in-memory resume covering every section kind.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::{
    commands::Context,
    diagnostics::Diagnostics,
    loader::{JSON_FILE_NAME, TEXT_FILE_NAME},
    render::{Charset, Layout},
    resume::{Contact, EducationItem, Project, Resume, Section, SkillCategory},
};

/// Test fixture owning a temporary data directory.
pub struct TestFixture {
    /// Root temp directory (holds everything).
    root: TempDir,
    /// Directory searched for resume documents.
    data_dir: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with an empty data directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let data_dir = root.path().join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");
        Self { root, data_dir }
    }

    /// Write `resume.json` with the given contents.
    pub fn with_json_resume(self, contents: &str) -> Self {
        fs::write(self.data_dir.join(JSON_FILE_NAME), contents).expect("write json resume");
        self
    }

    /// Write `resume.txt` with the given contents.
    pub fn with_text_resume(self, contents: &str) -> Self {
        fs::write(self.data_dir.join(TEXT_FILE_NAME), contents).expect("write text resume");
        self
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the fixture root, usable as an output directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// A resume with one section of each kind and every contact field set.
pub fn sample_resume() -> Resume {
    Resume {
        name: "Sam Rivera".to_string(),
        location: Some("Austin, TX".to_string()),
        contact: Contact {
            email: Some("sam@example.com".to_string()),
            phone: Some("+1 512 555 0199".to_string()),
            linkedin: Some("https://linkedin.com/in/samrivera".to_string()),
            github: Some("https://github.com/samrivera".to_string()),
            portfolio: Some("https://samrivera.dev".to_string()),
        },
        sections: vec![
            Section::Education {
                title: "Education".to_string(),
                items: vec![EducationItem {
                    institution: "University of Texas".to_string(),
                    degree: Some("B.S. Electrical Engineering".to_string()),
                    dates: Some("2012 - 2016".to_string()),
                    details: vec!["Senior design award".to_string()],
                }],
            },
            Section::Skills {
                title: "Skills".to_string(),
                categories: vec![SkillCategory {
                    name: "Languages".to_string(),
                    skills: vec!["Rust".to_string(), "C".to_string()],
                }],
            },
            Section::Projects {
                title: "Projects".to_string(),
                projects: vec![
                    Project {
                        name: "Beacon".to_string(),
                        description: Some("Low-power sensor firmware.".to_string()),
                        technologies: vec!["Rust".to_string(), "Embassy".to_string()],
                        link: Some("https://github.com/samrivera/beacon".to_string()),
                        highlights: vec!["Runs for a year on one coin cell".to_string()],
                    },
                    Project {
                        name: "Atlas".to_string(),
                        description: Some("Map tile cache.".to_string()),
                        ..Project::default()
                    },
                ],
            },
            Section::Achievements {
                title: "Achievements".to_string(),
                achievements: vec!["IEEE student paper prize".to_string()],
            },
        ],
    }
}

/// An unboxed, uncolored 80-column layout.
pub fn plain_layout() -> Layout {
    Layout {
        width: 80,
        charset: Charset::Unicode,
        color: false,
        boxed: false,
        banner: false,
        gradient: false,
    }
}

/// A command context around `resume` with a plain layout.
pub fn plain_context(resume: Resume) -> Context {
    Context {
        resume,
        layout: plain_layout(),
        diagnostics: Diagnostics::new(false),
    }
}
