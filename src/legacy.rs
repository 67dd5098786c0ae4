//! Reader and writer for the plain-text resume format.
//!
//! The format is three fixed header lines (name, location, contact line)
//! followed by sections introduced by well-known header lines:
//!
//! ```text
//! Jane Doe
//! Berlin, Germany
//! jane@example.com | +49 30 1234567 | linkedin.com/in/janedoe
//!
//! EDUCATION
//! Technical University | 2014 - 2018
//! B.Sc. Computer Science
//! - Thesis on persistent data structures
//! ```
//!
//! Parsing never fails. Anything that cannot be recognized is dropped or
//! left absent.

use std::sync::LazyLock;

use regex::Regex;

use crate::resume::{
    Contact, EducationItem, Project, Resume, Section, SectionKind, SkillCategory,
};

/// Email addresses on the contact line.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email pattern")
});

/// Phone numbers, which must start a field so URL digits never match.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s|,;:])(\+?\(?\d[\d\s().-]{7,}\d)").expect("valid phone pattern")
});

/// LinkedIn profile handles.
static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_-]+)").expect("valid linkedin pattern")
});

/// Header prefixes, lowercase, mapped to the section kind they open.
const HEADERS: &[(&str, SectionKind)] = &[
    ("education", SectionKind::Education),
    ("academic", SectionKind::Education),
    ("technical skill", SectionKind::Skills),
    ("core skill", SectionKind::Skills),
    ("skill", SectionKind::Skills),
    ("project", SectionKind::Projects),
    ("personal project", SectionKind::Projects),
    ("selected project", SectionKind::Projects),
    ("achievement", SectionKind::Achievements),
    ("award", SectionKind::Achievements),
    ("honor", SectionKind::Achievements),
    ("accomplishment", SectionKind::Achievements),
];

/// Longest line that can still be a section header.
const MAX_HEADER_LEN: usize = 40;

/// Labels that introduce a project's technology list.
const TECH_LABELS: &[&str] = &["tech", "technologies", "stack", "built with", "tools"];

/// Labels that introduce a project's link.
const LINK_LABELS: &[&str] = &["link", "url", "repo", "repository", "demo"];

/// Parse a plain-text resume.
pub fn parse(text: &str) -> Resume {
    let mut lines = text.lines();
    let name = lines.next().map(str::trim).unwrap_or_default().to_string();
    let location = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string);
    let contact = parse_contact(lines.next().unwrap_or_default());

    let mut sections = Vec::new();
    let mut current: Option<SectionBuilder> = None;
    for line in lines {
        if let Some(kind) = header_kind(line) {
            if let Some(builder) = current.take() {
                sections.push(builder.finish());
            }
            current = Some(SectionBuilder::new(kind));
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Some(builder) = current.as_mut() {
            builder.lines.push(line.to_string());
        }
    }
    if let Some(builder) = current {
        sections.push(builder.finish());
    }

    Resume {
        name,
        location,
        contact,
        sections,
    }
}

/// Mine the contact line for email, phone and LinkedIn.
pub fn parse_contact(line: &str) -> Contact {
    let email = EMAIL.find(line).map(|found| found.as_str().to_string());
    let phone = PHONE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str().trim().to_string());
    let linkedin = LINKEDIN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|handle| format!("https://linkedin.com/in/{}", handle.as_str()));

    Contact {
        email,
        phone,
        linkedin,
        ..Contact::default()
    }
}

/// Return the section kind a header line opens, if it is a header.
pub fn header_kind(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.chars().count() > MAX_HEADER_LEN
        || trimmed.contains('|')
        || strip_bullet(trimmed).is_some()
    {
        return None;
    }
    let trimmed = trimmed.trim_end_matches(':').trim_end();
    // "Skills: Rust, Go" is content, not a header.
    if trimmed.contains(':') {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    HEADERS
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|(_, kind)| *kind)
}

/// Return the text after a bullet marker, if the line is a bullet.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    for marker in ['•', '-', '*', '·', '▪'] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            if marker != '•' && !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return None;
            }
            return Some(rest.trim());
        }
    }
    None
}

/// Accumulates the body lines of one section.
#[derive(Debug)]
struct SectionBuilder {
    /// Kind named by the header.
    kind: SectionKind,
    /// Non-empty body lines.
    lines: Vec<String>,
}

impl SectionBuilder {
    /// Start a section of the given kind.
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    /// Build the section from its body lines.
    fn finish(self) -> Section {
        let title = self.kind.title().to_string();
        let lines = self.lines.iter().map(String::as_str);
        match self.kind {
            SectionKind::Education => Section::Education {
                title,
                items: parse_education(lines),
            },
            SectionKind::Skills => Section::Skills {
                title,
                categories: parse_skills(lines),
            },
            SectionKind::Projects => Section::Projects {
                title,
                projects: parse_projects(lines),
            },
            SectionKind::Achievements => Section::Achievements {
                title,
                achievements: lines
                    .map(|line| strip_bullet(line).unwrap_or(line.trim()).to_string())
                    .filter(|line| !line.is_empty())
                    .collect(),
            },
        }
    }
}

/// Split a line into `|`-separated, trimmed, non-empty fields.
fn split_fields(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma or semicolon separated list.
fn split_list(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `Label: value` when the label is one of `labels`.
fn labelled<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    let (label, value) = line.split_once(':')?;
    let label = label.trim().to_lowercase();
    labels
        .contains(&label.as_str())
        .then_some(value.trim())
}

/// Return true when a field looks like a URL.
fn looks_like_link(field: &str) -> bool {
    let lowered = field.to_lowercase();
    lowered.starts_with("http://")
        || lowered.starts_with("https://")
        || lowered.starts_with("www.")
        || lowered.contains("github.com/")
        || lowered.contains(".com/")
}

/// Parse education entries.
fn parse_education<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<EducationItem> {
    let mut items: Vec<EducationItem> = Vec::new();
    for line in lines {
        if let Some(detail) = strip_bullet(line) {
            if items.is_empty() {
                items.push(EducationItem::default());
            }
            if let Some(item) = items.last_mut()
                && !detail.is_empty()
            {
                item.details.push(detail.to_string());
            }
            continue;
        }

        let fields = split_fields(line);
        let Some((head, rest)) = fields.split_first() else {
            continue;
        };
        let dates = (!rest.is_empty()).then(|| rest.join(" | "));
        let awaiting_degree = items.last().is_some_and(|item| {
            item.degree.is_none() && item.details.is_empty() && !item.institution.is_empty()
        });
        if awaiting_degree && let Some(item) = items.last_mut() {
            item.degree = Some(head.clone());
            if item.dates.is_none() {
                item.dates = dates;
            }
            continue;
        }
        items.push(EducationItem {
            institution: head.clone(),
            dates,
            ..EducationItem::default()
        });
    }
    items
}

/// Parse skill categories.
fn parse_skills<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<SkillCategory> {
    let mut categories: Vec<SkillCategory> = Vec::new();
    for line in lines {
        let text = strip_bullet(line).unwrap_or(line.trim());
        if let Some((name, list)) = text.split_once(':') {
            categories.push(SkillCategory {
                name: name.trim().to_string(),
                skills: split_list(list),
            });
            continue;
        }

        let skills = split_list(text);
        match categories.iter_mut().find(|category| category.name.is_empty()) {
            Some(category) => category.skills.extend(skills),
            None => categories.push(SkillCategory {
                name: String::new(),
                skills,
            }),
        }
    }
    categories
}

/// Parse project entries.
fn parse_projects<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Project> {
    let mut projects: Vec<Project> = Vec::new();
    for line in lines {
        if let Some(highlight) = strip_bullet(line) {
            if projects.is_empty() {
                projects.push(Project::default());
            }
            if let Some(project) = projects.last_mut()
                && !highlight.is_empty()
            {
                project.highlights.push(highlight.to_string());
            }
            continue;
        }

        if let Some(project) = projects.last_mut() {
            if let Some(list) = labelled(line, TECH_LABELS) {
                project.technologies.extend(split_list(list));
                continue;
            }
            if let Some(link) = labelled(line, LINK_LABELS) {
                project.link = Some(link.to_string()).filter(|link| !link.is_empty());
                continue;
            }
            if project.description.is_none() && project.highlights.is_empty() {
                let description = line.trim().trim_end_matches('|').trim_end();
                project.description = Some(description.to_string());
                continue;
            }
        }

        projects.push(project_header(line));
    }
    projects
}

/// Parse a `Name | tech, tech | link` project header.
fn project_header(line: &str) -> Project {
    let fields = split_fields(line);
    let mut project = Project::default();
    let mut fields = fields.into_iter();
    project.name = fields.next().unwrap_or_default();
    for field in fields {
        if looks_like_link(&field) {
            project.link = Some(field);
        } else {
            project.technologies.extend(split_list(&field));
        }
    }
    project
}

/// Write a resume in the plain-text format.
///
/// The output parses back to the same name, location, email, phone,
/// LinkedIn handle and section kinds.
pub fn to_text(resume: &Resume) -> String {
    let mut lines = vec![
        resume.name.clone(),
        resume.location.clone().unwrap_or_default(),
        contact_line(&resume.contact),
    ];

    for section in &resume.sections {
        if section.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(section_header(section));
        write_section_body(section, &mut lines);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Join present contact fields into one line.
pub fn contact_line(contact: &Contact) -> String {
    [
        &contact.email,
        &contact.phone,
        &contact.linkedin,
        &contact.github,
        &contact.portfolio,
    ]
    .into_iter()
    .flatten()
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Pick a header line the parser will recognize for this section.
fn section_header(section: &Section) -> String {
    let kind = section.kind();
    if header_kind(section.title()) == Some(kind) {
        section.title().to_uppercase()
    } else {
        kind.title().to_uppercase()
    }
}

/// Append the body lines of a section.
fn write_section_body(section: &Section, lines: &mut Vec<String>) {
    match section {
        Section::Education { items, .. } => {
            for item in items {
                if !item.institution.is_empty() {
                    lines.push(not_header(with_fields(
                        &item.institution,
                        item.dates.as_deref(),
                    )));
                }
                if let Some(degree) = &item.degree {
                    lines.push(not_header(degree.clone()));
                }
                lines.extend(item.details.iter().map(|detail| format!("- {detail}")));
            }
        }
        Section::Skills { categories, .. } => {
            for category in categories {
                let list = category.skills.join(", ");
                if category.name.is_empty() {
                    lines.push(format!("- {list}"));
                } else {
                    lines.push(format!("{}: {list}", category.name));
                }
            }
        }
        Section::Projects { projects, .. } => {
            for project in projects {
                let mut header = vec![project.name.clone()];
                if !project.technologies.is_empty() {
                    header.push(project.technologies.join(", "));
                }
                if let Some(link) = &project.link {
                    header.push(link.clone());
                }
                lines.push(not_header(header.join(" | ")));
                if let Some(description) = &project.description {
                    lines.push(not_header(description.clone()));
                }
                lines.extend(project.highlights.iter().map(|item| format!("- {item}")));
            }
        }
        Section::Achievements { achievements, .. } => {
            lines.extend(achievements.iter().map(|item| format!("- {item}")));
        }
    }
}

/// Append an optional `| extra` field to a line.
fn with_fields(head: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{head} | {extra}"),
        None => head.to_string(),
    }
}

/// Close a body line with an empty field when it would read as a header.
fn not_header(line: String) -> String {
    if header_kind(&line).is_some() {
        format!("{line} |")
    } else {
        line
    }
}
