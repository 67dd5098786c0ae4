//! Export to the JSON Resume schema (<https://jsonresume.org/schema>).

use serde::Serialize;

use crate::resume::{Resume, Section};

/// Schema URL written to the `$schema` key.
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/jsonresume/resume-schema/v1.0.0/schema.json";

/// Top-level JSON Resume document.
#[derive(Debug, Serialize)]
pub struct JsonResume {
    /// Schema reference.
    #[serde(rename = "$schema")]
    schema: &'static str,
    /// Name and contact details.
    basics: Basics,
    /// Education entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    education: Vec<Education>,
    /// Skill groups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skills: Vec<Skill>,
    /// Projects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    projects: Vec<ProjectEntry>,
    /// Achievements, as awards.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    awards: Vec<Award>,
}

/// The `basics` object.
#[derive(Debug, Serialize)]
struct Basics {
    /// Full name.
    name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    /// Personal site.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    /// Location, with the free-form text as the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    /// Social profiles.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    profiles: Vec<Profile>,
}

/// The `basics.location` object.
#[derive(Debug, Serialize)]
struct Location {
    /// Free-form address.
    address: String,
}

/// One `basics.profiles` entry.
#[derive(Debug, Serialize)]
struct Profile {
    /// Network name, such as "LinkedIn".
    network: &'static str,
    /// Account name on the network.
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    /// Profile URL.
    url: String,
}

/// One `education` entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Education {
    /// School name.
    institution: String,
    /// Degree.
    #[serde(skip_serializing_if = "Option::is_none")]
    study_type: Option<String>,
    /// Start of the date range.
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    /// End of the date range.
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
    /// Supporting details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    courses: Vec<String>,
}

/// One `skills` entry.
#[derive(Debug, Serialize)]
struct Skill {
    /// Group name.
    name: String,
    /// Skills in the group.
    keywords: Vec<String>,
}

/// One `projects` entry.
#[derive(Debug, Serialize)]
struct ProjectEntry {
    /// Project name.
    name: String,
    /// Summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Highlights.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<String>,
    /// Technologies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
    /// Project URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

/// One `awards` entry.
#[derive(Debug, Serialize)]
struct Award {
    /// Award text.
    title: String,
}

impl JsonResume {
    /// Map a resume onto the JSON Resume schema.
    pub fn from_resume(resume: &Resume) -> Self {
        let mut document = Self {
            schema: SCHEMA_URL,
            basics: basics(resume),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            awards: Vec::new(),
        };

        for section in &resume.sections {
            match section {
                Section::Education { items, .. } => {
                    document.education.extend(items.iter().map(|item| {
                        let (start_date, end_date) = split_dates(item.dates.as_deref());
                        Education {
                            institution: item.institution.clone(),
                            study_type: item.degree.clone(),
                            start_date,
                            end_date,
                            courses: item.details.clone(),
                        }
                    }));
                }
                Section::Skills { categories, .. } => {
                    document
                        .skills
                        .extend(categories.iter().map(|category| Skill {
                            name: if category.name.is_empty() {
                                section.title().to_string()
                            } else {
                                category.name.clone()
                            },
                            keywords: category.skills.clone(),
                        }));
                }
                Section::Projects { projects, .. } => {
                    document
                        .projects
                        .extend(projects.iter().map(|project| ProjectEntry {
                            name: project.name.clone(),
                            description: project.description.clone(),
                            highlights: project.highlights.clone(),
                            keywords: project.technologies.clone(),
                            url: project.link.clone(),
                        }));
                }
                Section::Achievements { achievements, .. } => {
                    document.awards.extend(
                        achievements
                            .iter()
                            .map(|title| Award { title: title.clone() }),
                    );
                }
            }
        }
        document
    }
}

/// Build the `basics` object.
fn basics(resume: &Resume) -> Basics {
    let contact = &resume.contact;
    let mut profiles = Vec::new();
    for (network, url) in [
        ("LinkedIn", &contact.linkedin),
        ("GitHub", &contact.github),
    ] {
        if let Some(url) = url {
            profiles.push(Profile {
                network,
                username: username(url),
                url: url.clone(),
            });
        }
    }

    Basics {
        name: resume.name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        url: contact.portfolio.clone(),
        location: resume.location.clone().map(|address| Location { address }),
        profiles,
    }
}

/// Take the last path segment of a profile URL as the username.
fn username(url: &str) -> Option<String> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains('.'))
        .map(str::to_string)
}

/// Split `2015 - 2019` style ranges into start and end.
///
/// A single value is treated as the end date.
fn split_dates(dates: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(dates) = dates.map(str::trim).filter(|dates| !dates.is_empty()) else {
        return (None, None);
    };
    for separator in [" - ", " – ", " — ", " to ", "–", "—"] {
        if let Some((start, end)) = dates.split_once(separator) {
            return (Some(start.trim().to_string()), Some(end.trim().to_string()));
        }
    }
    (None, Some(dates.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{JsonResume, split_dates, username};
    use crate::testutil::sample_resume;

    #[test]
    fn maps_basics_and_profiles() {
        let value = serde_json::to_value(JsonResume::from_resume(&sample_resume())).expect("json");
        assert_eq!(value["basics"]["name"], json!("Sam Rivera"));
        assert_eq!(value["basics"]["url"], json!("https://samrivera.dev"));
        assert_eq!(value["basics"]["location"]["address"], json!("Austin, TX"));
        assert_eq!(value["basics"]["profiles"][0]["network"], json!("LinkedIn"));
        assert_eq!(value["basics"]["profiles"][0]["username"], json!("samrivera"));
        assert!(value["$schema"].is_string());
    }

    #[test]
    fn maps_sections() {
        let value = serde_json::to_value(JsonResume::from_resume(&sample_resume())).expect("json");
        assert_eq!(value["education"][0]["studyType"], json!("B.S. Electrical Engineering"));
        assert_eq!(value["education"][0]["startDate"], json!("2012"));
        assert_eq!(value["education"][0]["endDate"], json!("2016"));
        assert_eq!(value["skills"][0]["keywords"], json!(["Rust", "C"]));
        assert_eq!(value["projects"][0]["keywords"], json!(["Rust", "Embassy"]));
        assert_eq!(value["awards"][0]["title"], json!("IEEE student paper prize"));
    }

    #[test]
    fn splits_date_ranges() {
        assert_eq!(
            split_dates(Some("2015 – 2019")),
            (Some("2015".to_string()), Some("2019".to_string()))
        );
        assert_eq!(split_dates(Some("May 2020")), (None, Some("May 2020".to_string())));
        assert_eq!(split_dates(None), (None, None));
    }

    #[test]
    fn extracts_usernames() {
        assert_eq!(username("https://github.com/octocat/").as_deref(), Some("octocat"));
        assert_eq!(username("https://example.com"), None);
    }
}
