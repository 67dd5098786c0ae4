//! Implementation of section commands such as `--skills` and `--projects`.

use textwrap::core::display_width;

use crate::{
    commands::{Context, write_output},
    error::Result,
    render::{Line, LineKind, present, project_lines, section_lines},
    resume::{Project, Resume, SectionKind},
};

/// Execute a section command, showing every section of the kind.
pub async fn run(context: &mut Context, kind: SectionKind) -> Result<()> {
    let sections = context.resume.sections_of(kind);
    if sections.is_empty() {
        context.diagnostics.warn(format!(
            "No {} section in the resume.",
            kind.title().to_lowercase()
        ));
        return Ok(());
    }

    let mut lines: Vec<Line> = sections.into_iter().flat_map(section_lines).collect();
    trim_leading_blank(&mut lines);
    write_output(&present(&lines, &context.layout))
}

/// Execute the projects command with an optional query.
pub async fn projects(context: &mut Context, query: &str) -> Result<()> {
    let selected = select_projects(&context.resume, query);
    if selected.is_empty() {
        if context.resume.projects().is_empty() {
            context.diagnostics.warn("No projects listed in the resume.");
        } else {
            context
                .diagnostics
                .warn(format!("No project matches '{}'.", query.trim()));
        }
        return Ok(());
    }

    let title = context
        .resume
        .sections_of(SectionKind::Projects)
        .first()
        .map(|section| section.title().to_string())
        .unwrap_or_else(|| SectionKind::Projects.title().to_string());
    let mut lines = vec![
        Line::new(LineKind::Heading, title.clone()),
        Line::new(LineKind::Rule, "─".repeat(display_width(&title).max(1))),
    ];
    for project in selected {
        lines.extend(project_lines(project));
    }
    write_output(&present(&lines, &context.layout))
}

/// Pick projects for a query.
///
/// An empty query selects everything. A positive integer selects that
/// project by 1-based position regardless of its name. Anything else is a
/// case-insensitive substring match on project names.
pub fn select_projects<'a>(resume: &'a Resume, query: &str) -> Vec<&'a Project> {
    let projects = resume.projects();
    let query = query.trim();
    if query.is_empty() {
        return projects;
    }

    if let Ok(position) = query.parse::<usize>()
        && position > 0
    {
        return projects.get(position - 1).copied().into_iter().collect();
    }

    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|project| project.name.to_lowercase().contains(&needle))
        .collect()
}

/// Drop the spacer that opens the first section.
fn trim_leading_blank(lines: &mut Vec<Line>) {
    if lines.first().is_some_and(|line| line.kind == LineKind::Blank) {
        lines.remove(0);
    }
}
