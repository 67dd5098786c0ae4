//! Locating and loading the resume document.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    defaults::DEFAULT_RESUME,
    diagnostics::Diagnostics,
    error::{Error, Result},
    legacy,
    paths::display_path,
    resume::{Resume, Section},
};

/// Structured resume file name.
pub const JSON_FILE_NAME: &str = "resume.json";
/// Plain-text resume file name.
pub const TEXT_FILE_NAME: &str = "resume.txt";

/// Where a loaded resume came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Read from a file on disk.
    File(PathBuf),
    /// The built-in document.
    Embedded,
}

/// A resume together with its origin.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// The normalized record.
    pub resume: Resume,
    /// Where the record was read from.
    pub origin: Origin,
}

/// Load the first resume document found in `data_dir`.
///
/// `resume.json` wins over `resume.txt`; when neither exists the built-in
/// document is used. Only unreadable files are errors; unparsable content
/// degrades through [`parse_document`].
pub async fn load(data_dir: &Path, diagnostics: &mut Diagnostics) -> Result<Loaded> {
    for name in [JSON_FILE_NAME, TEXT_FILE_NAME] {
        let path = data_dir.join(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => continue,
            Err(error) => {
                return Err(Error::ResumeRead {
                    path,
                    source: error,
                });
            }
        };

        let contents = String::from_utf8_lossy(&bytes);
        let resume = parse_document(&contents, &path, diagnostics);
        return Ok(Loaded {
            resume,
            origin: Origin::File(path),
        });
    }

    Ok(Loaded {
        resume: legacy::parse(DEFAULT_RESUME),
        origin: Origin::Embedded,
    })
}

/// Parse document contents as JSON, falling back to the plain-text format.
///
/// Only documents that are not JSON or whose top-level fields have the wrong
/// shape fall back. Individual sections that match no known payload are
/// skipped with a warning.
pub fn parse_document(contents: &str, path: &Path, diagnostics: &mut Diagnostics) -> Resume {
    let parsed = serde_json::from_str::<Value>(contents)
        .and_then(|value| resume_from_json(value, path, diagnostics));
    match parsed {
        Ok(resume) => resume,
        Err(error) => {
            let expected_json = contents.trim_start().starts_with('{')
                || path.extension().is_some_and(|extension| extension == "json");
            if expected_json {
                diagnostics.warn(format!(
                    "{} is not a valid resume JSON document ({error}); reading it as plain text",
                    display_path(path)
                ));
            }
            legacy::parse(contents)
        }
    }
}

/// Build a resume from a JSON value, deserializing sections one at a time.
fn resume_from_json(
    mut value: Value,
    path: &Path,
    diagnostics: &mut Diagnostics,
) -> serde_json::Result<Resume> {
    let raw_sections = value.as_object_mut().and_then(|map| map.remove("sections"));
    let mut resume: Resume = serde_json::from_value(value)?;

    let items = match raw_sections {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            diagnostics.warn(format!(
                "Ignoring sections in {}: expected a list",
                display_path(path)
            ));
            Vec::new()
        }
    };
    for (index, item) in items.into_iter().enumerate() {
        let title = item
            .get("title")
            .and_then(Value::as_str)
            .map_or_else(|| format!("#{}", index + 1), str::to_string);
        match serde_json::from_value::<Section>(item) {
            Ok(section) => resume.sections.push(section),
            Err(_) => diagnostics.warn(format!(
                "Skipping section '{title}' in {}: no education items, skill categories, \
                 projects or achievements",
                display_path(path)
            )),
        }
    }
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Origin, load, parse_document};
    use crate::{
        diagnostics::Diagnostics,
        resume::{Section, SectionKind},
        testutil::TestFixture,
    };

    #[tokio::test]
    async fn prefers_json_over_text() {
        let fixture = TestFixture::new()
            .with_json_resume(r#"{"name": "From Json"}"#)
            .with_text_resume("From Text\nSomewhere\n\n");
        let mut diagnostics = Diagnostics::new(false);

        let loaded = load(fixture.data_dir(), &mut diagnostics)
            .await
            .expect("load");
        assert_eq!(loaded.resume.name, "From Json");
        assert!(matches!(loaded.origin, Origin::File(ref path) if path.ends_with("resume.json")));
    }

    #[tokio::test]
    async fn reads_text_when_json_is_missing() {
        let fixture = TestFixture::new().with_text_resume("From Text\nSomewhere\n\n");
        let mut diagnostics = Diagnostics::new(false);

        let loaded = load(fixture.data_dir(), &mut diagnostics)
            .await
            .expect("load");
        assert_eq!(loaded.resume.name, "From Text");
        assert_eq!(loaded.resume.location.as_deref(), Some("Somewhere"));
    }

    #[tokio::test]
    async fn falls_back_to_embedded_resume() {
        let fixture = TestFixture::new();
        let mut diagnostics = Diagnostics::new(false);

        let loaded = load(fixture.data_dir(), &mut diagnostics)
            .await
            .expect("load");
        assert_eq!(loaded.origin, Origin::Embedded);
        assert!(!loaded.resume.name.is_empty());
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn malformed_json_degrades_to_text() {
        let mut diagnostics = Diagnostics::new(false);
        let resume = parse_document("{ not json", Path::new("resume.json"), &mut diagnostics);
        assert_eq!(resume.name, "{ not json");
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn unknown_sections_are_skipped() {
        let contents = r#"{
            "name": "Jordan Lee",
            "contact": {"email": "j@x.org"},
            "sections": [
                {"title": "Skills", "categories": [{"name": "Languages", "skills": ["Rust"]}]},
                {"title": "Experience", "entries": [{"company": "Acme"}]},
                {"title": "Awards", "achievements": ["Best demo"]}
            ]
        }"#;
        let mut diagnostics = Diagnostics::new(false);
        let resume = parse_document(contents, Path::new("resume.json"), &mut diagnostics);

        assert_eq!(resume.name, "Jordan Lee");
        assert_eq!(resume.contact.email.as_deref(), Some("j@x.org"));
        let kinds: Vec<SectionKind> = resume.sections.iter().map(Section::kind).collect();
        assert_eq!(kinds, [SectionKind::Skills, SectionKind::Achievements]);
        assert_eq!(diagnostics.warnings().len(), 1);
        assert!(diagnostics.warnings()[0].contains("Experience"));
    }

    #[test]
    fn wrong_top_level_shape_degrades_to_text() {
        let mut diagnostics = Diagnostics::new(false);
        let resume = parse_document(r#"{"name": 42}"#, Path::new("resume.json"), &mut diagnostics);
        assert_eq!(resume.name, r#"{"name": 42}"#);
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn plain_text_needs_no_warning() {
        let mut diagnostics = Diagnostics::new(false);
        let resume = parse_document("Ada\nLondon\n", Path::new("resume.txt"), &mut diagnostics);
        assert_eq!(resume.name, "Ada");
        assert!(diagnostics.warnings().is_empty());
    }
}
