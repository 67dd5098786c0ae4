//! Implementation of the `--links` listing.

use crate::{
    commands::{Context, write_output},
    error::Result,
    palette,
    resume::Resume,
};

/// A labelled URL found in the resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// What the link points at.
    pub(crate) label: String,
    /// The URL as written.
    pub(crate) url: String,
}

/// Execute the links command with an optional filter.
pub async fn run(context: &mut Context, query: &str) -> Result<()> {
    let links = filter_links(collect_links(&context.resume), query);
    if links.is_empty() {
        let message = if query.trim().is_empty() {
            "No links listed in the resume.".to_string()
        } else {
            format!("No link matches '{}'.", query.trim())
        };
        context.diagnostics.warn(message);
        return Ok(());
    }

    write_output(&format_links(context, &links))
}

/// Format links one per line as `Label: url`.
fn format_links(context: &Context, links: &[Link]) -> String {
    let use_color = context.layout.color;
    let mut output = String::new();
    for link in links {
        let label = format!("{}:", context.charset_text(&link.label));
        output.push_str(&palette::fmt_label(&label, use_color));
        output.push(' ');
        output.push_str(&context.charset_text(&link.url));
        output.push('\n');
    }
    output
}

/// Gather profile links followed by project links.
pub fn collect_links(resume: &Resume) -> Vec<Link> {
    let contact = &resume.contact;
    let profiles = [
        ("LinkedIn", &contact.linkedin),
        ("GitHub", &contact.github),
        ("Portfolio", &contact.portfolio),
    ];
    let mut links: Vec<Link> = profiles
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_ref().map(|url| Link {
                label: label.to_string(),
                url: url.clone(),
            })
        })
        .collect();

    links.extend(resume.projects().into_iter().filter_map(|project| {
        project.link.as_ref().map(|url| Link {
            label: project.name.clone(),
            url: url.clone(),
        })
    }));
    links
}

/// Keep links whose label or URL contains the query, ignoring case.
pub fn filter_links(links: Vec<Link>, query: &str) -> Vec<Link> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return links;
    }
    links
        .into_iter()
        .filter(|link| {
            link.label.to_lowercase().contains(&needle) || link.url.to_lowercase().contains(&needle)
        })
        .collect()
}
