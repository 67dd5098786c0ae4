//! The normalized resume record and section lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resume loaded from any supported source format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Free-form location, such as a city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contact details.
    #[serde(default)]
    pub contact: Contact,
    /// Sections in source order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Contact details; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// GitHub profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Personal site URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

/// A titled block of resume content.
///
/// The JSON form carries no tag; the variant is identified by its payload key
/// (`items`, `categories`, `projects` or `achievements`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// Schools and degrees.
    Education {
        /// Display title.
        title: String,
        /// Education entries.
        items: Vec<EducationItem>,
    },
    /// Grouped skill lists.
    Skills {
        /// Display title.
        title: String,
        /// Skill groups.
        categories: Vec<SkillCategory>,
    },
    /// Project write-ups.
    Projects {
        /// Display title.
        title: String,
        /// Projects in source order.
        projects: Vec<Project>,
    },
    /// Awards and other achievements.
    Achievements {
        /// Display title.
        title: String,
        /// One line per achievement.
        achievements: Vec<String>,
    },
}

/// One school or degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    /// School name.
    #[serde(default)]
    pub institution: String,
    /// Degree or program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    /// Date range as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    /// Supporting bullet points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// A named group of skills. The name may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Group label, such as "Languages".
    #[serde(default)]
    pub name: String,
    /// Skills in the group.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Technologies used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    /// Project URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Bullet-point highlights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

/// Section categories used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Education sections.
    Education,
    /// Skills sections.
    Skills,
    /// Projects sections.
    Projects,
    /// Achievements sections.
    Achievements,
}

impl SectionKind {
    /// Lowercase title fragments that identify this kind.
    pub(crate) fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Education => &["educat", "academic"],
            Self::Skills => &["skill"],
            Self::Projects => &["project"],
            Self::Achievements => &["achievement", "award", "honor", "accomplishment"],
        }
    }

    /// Canonical display title.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
        }
    }

    /// Return true when a title names this kind.
    pub(crate) fn matches_title(self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.keywords()
            .iter()
            .any(|keyword| lowered.contains(keyword))
    }
}

impl Section {
    /// Return the display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Education { title, .. }
            | Self::Skills { title, .. }
            | Self::Projects { title, .. }
            | Self::Achievements { title, .. } => title,
        }
    }

    /// Return the kind implied by the payload.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Education { .. } => SectionKind::Education,
            Self::Skills { .. } => SectionKind::Skills,
            Self::Projects { .. } => SectionKind::Projects,
            Self::Achievements { .. } => SectionKind::Achievements,
        }
    }

    /// Return true when the section carries no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Education { items, .. } => items.is_empty(),
            Self::Skills { categories, .. } => categories.is_empty(),
            Self::Projects { projects, .. } => projects.is_empty(),
            Self::Achievements { achievements, .. } => achievements.is_empty(),
        }
    }
}

impl Resume {
    /// Find sections of a kind, matching titles first and payloads second.
    ///
    /// A title match only counts when the payload agrees, so a "Skills" title
    /// on a projects payload never shows up in a skills lookup.
    pub fn sections_of(&self, kind: SectionKind) -> Vec<&Section> {
        let by_title: Vec<&Section> = self
            .sections
            .iter()
            .filter(|section| section.kind() == kind && kind.matches_title(section.title()))
            .collect();
        if !by_title.is_empty() {
            return by_title;
        }
        self.sections
            .iter()
            .filter(|section| section.kind() == kind)
            .collect()
    }

    /// Return all projects across project sections, in source order.
    pub fn projects(&self) -> Vec<&Project> {
        self.sections
            .iter()
            .filter_map(|section| match section {
                Section::Projects { projects, .. } => Some(projects),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Resolve a dotted path such as `contact.email` against the JSON form.
    ///
    /// Numeric segments index arrays. Missing segments and null values
    /// resolve to `None`.
    pub fn get_by_path(&self, path: &str) -> Option<Value> {
        let root = serde_json::to_value(self).ok()?;
        lookup_path(&root, path).cloned()
    }
}

/// Walk a dotted path through a JSON value.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.').filter(|segment| !segment.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(values) => values.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

/// Render a JSON scalar the way a user expects to read it.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Contact, Project, Resume, Section, SectionKind, value_to_text};

    fn sample() -> Resume {
        Resume {
            name: "Ada Lovelace".to_string(),
            location: Some("London".to_string()),
            contact: Contact {
                email: Some("a@b.com".to_string()),
                ..Contact::default()
            },
            sections: vec![
                Section::Achievements {
                    title: "Honors".to_string(),
                    achievements: vec!["First program".to_string()],
                },
                Section::Projects {
                    title: "Side Work".to_string(),
                    projects: vec![Project {
                        name: "Engine".to_string(),
                        ..Project::default()
                    }],
                },
            ],
        }
    }

    #[test]
    fn resolves_contact_email() {
        let resume = sample();
        assert_eq!(resume.get_by_path("contact.email"), Some(json!("a@b.com")));
    }

    #[test]
    fn missing_paths_resolve_to_none() {
        let resume = sample();
        assert_eq!(resume.get_by_path("contact.phone"), None);
        assert_eq!(resume.get_by_path("contact.email.domain"), None);
        assert_eq!(resume.get_by_path("nope"), None);
    }

    #[test]
    fn indexes_arrays_by_position() {
        let resume = sample();
        let title = resume.get_by_path("sections.1.title").expect("title");
        assert_eq!(value_to_text(&title), "Side Work");
    }

    #[test]
    fn lookup_falls_back_to_payload_kind() {
        let resume = sample();
        let projects = resume.sections_of(SectionKind::Projects);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title(), "Side Work");

        let achievements = resume.sections_of(SectionKind::Achievements);
        assert_eq!(achievements[0].title(), "Honors");
        assert!(resume.sections_of(SectionKind::Education).is_empty());
    }

    #[test]
    fn deserializes_untagged_sections() {
        let value = json!({
            "name": "Ada",
            "sections": [
                {"title": "Skills", "categories": [{"name": "Math", "skills": ["Analysis"]}]},
                {"title": "Education", "items": [{"institution": "Home"}]}
            ]
        });
        let resume: Resume = serde_json::from_value(value).expect("resume");
        assert_eq!(resume.sections[0].kind(), SectionKind::Skills);
        assert_eq!(resume.sections[1].kind(), SectionKind::Education);
    }
}
