//! Turning a resume into wrapped, optionally boxed and colored text.

use std::borrow::Cow;

use textwrap::{Options, core::display_width};

use crate::{
    decorate,
    palette,
    resume::{Contact, EducationItem, Project, Resume, Section},
    sanitize::to_ascii,
};

/// Narrowest content width ever used for wrapping.
pub const MIN_CONTENT_WIDTH: usize = 20;

/// Columns taken by a box border and its padding.
const FRAME_OVERHEAD: usize = 4;

/// What a rendered line represents, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The person's name.
    Name,
    /// One row of the large-text name banner.
    Banner,
    /// A `Label: value` contact line.
    Contact,
    /// A section title.
    Heading,
    /// The rule under a section title.
    Rule,
    /// The first line of an entry: a school, project or skill group.
    Entry,
    /// Everything else.
    Body,
    /// An empty spacer line.
    Blank,
}

/// A single line of output before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Styling role.
    pub kind: LineKind,
    /// Unstyled text.
    pub text: String,
}

impl Line {
    /// Create a line of the given kind.
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create an empty spacer line.
    pub fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Character repertoire for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Unicode bullets, dashes and rounded box corners.
    Unicode,
    /// ASCII substitutes only.
    Ascii,
}

/// Presentation settings resolved from flags and config.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Total width available, in columns.
    pub width: usize,
    /// Character repertoire.
    pub charset: Charset,
    /// Emit ANSI colors.
    pub color: bool,
    /// Draw a border around the output.
    pub boxed: bool,
    /// Try the large-text name banner.
    pub banner: bool,
    /// Color the name along a truecolor gradient.
    pub gradient: bool,
}

impl Layout {
    /// Return the width available to text inside any border.
    pub fn content_width(&self) -> usize {
        let width = if self.boxed {
            self.width.saturating_sub(FRAME_OVERHEAD)
        } else {
            self.width
        };
        width.max(MIN_CONTENT_WIDTH)
    }
}

/// Build the full resume: name, contact block, then every section.
pub fn resume_lines(resume: &Resume) -> Vec<Line> {
    let mut lines = header_lines(resume);
    for section in &resume.sections {
        lines.extend(section_lines(section));
    }
    lines
}

/// Build the name and contact block.
pub fn header_lines(resume: &Resume) -> Vec<Line> {
    let mut lines = vec![Line::new(LineKind::Name, resume.name.clone()), Line::blank()];
    lines.extend(contact_lines(resume.location.as_deref(), &resume.contact));
    lines
}

/// Build `Label: value` lines for every present contact field.
pub fn contact_lines(location: Option<&str>, contact: &Contact) -> Vec<Line> {
    [
        ("Location", location),
        ("Email", contact.email.as_deref()),
        ("Phone", contact.phone.as_deref()),
        ("LinkedIn", contact.linkedin.as_deref()),
        ("GitHub", contact.github.as_deref()),
        ("Portfolio", contact.portfolio.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value.map(|value| Line::new(LineKind::Contact, format!("{label}: {value}")))
    })
    .collect()
}

/// Build a titled section, with a leading spacer line.
pub fn section_lines(section: &Section) -> Vec<Line> {
    let title = section.title();
    let mut lines = vec![
        Line::blank(),
        Line::new(LineKind::Heading, title),
        Line::new(LineKind::Rule, "─".repeat(display_width(title).max(1))),
    ];

    match section {
        Section::Education { items, .. } => {
            for item in items {
                lines.extend(education_lines(item));
            }
        }
        Section::Skills { categories, .. } => {
            for category in categories {
                let skills = category.skills.join(", ");
                let text = if category.name.is_empty() {
                    format!("• {skills}")
                } else {
                    format!("• {}: {skills}", category.name)
                };
                lines.push(Line::new(LineKind::Body, text));
            }
        }
        Section::Projects { projects, .. } => {
            for project in projects {
                lines.extend(project_lines(project));
            }
        }
        Section::Achievements { achievements, .. } => {
            lines.extend(
                achievements
                    .iter()
                    .map(|item| Line::new(LineKind::Body, format!("• {item}"))),
            );
        }
    }
    lines
}

/// Build the lines for one education entry.
fn education_lines(item: &EducationItem) -> Vec<Line> {
    let mut lines = Vec::new();
    if !item.institution.is_empty() {
        let text = match &item.dates {
            Some(dates) => format!("{} — {dates}", item.institution),
            None => item.institution.clone(),
        };
        lines.push(Line::new(LineKind::Entry, text));
    }
    if let Some(degree) = &item.degree {
        lines.push(Line::new(LineKind::Body, format!("  {degree}")));
    }
    lines.extend(
        item.details
            .iter()
            .map(|detail| Line::new(LineKind::Body, format!("  • {detail}"))),
    );
    lines
}

/// Build the lines for one project.
pub fn project_lines(project: &Project) -> Vec<Line> {
    let mut lines = Vec::new();
    let title = if project.technologies.is_empty() {
        project.name.clone()
    } else {
        format!("{} — {}", project.name, project.technologies.join(", "))
    };
    lines.push(Line::new(LineKind::Entry, title));
    if let Some(description) = &project.description {
        lines.push(Line::new(LineKind::Body, format!("  {description}")));
    }
    lines.extend(
        project
            .highlights
            .iter()
            .map(|highlight| Line::new(LineKind::Body, format!("  • {highlight}"))),
    );
    if let Some(link) = &project.link {
        lines.push(Line::new(LineKind::Contact, format!("  Link: {link}")));
    }
    lines
}

/// Return the bullet prefix of a line: indent, marker and following spaces.
pub fn bullet_prefix(text: &str) -> Option<&str> {
    let indent = text.len() - text.trim_start().len();
    let rest = &text[indent..];
    let marker = rest.chars().next().filter(|ch| matches!(ch, '•' | '-'))?;
    let after = &rest[marker.len_utf8()..];
    let spaces = after.len() - after.trim_start().len();
    if spaces == 0 {
        return None;
    }
    Some(&text[..indent + marker.len_utf8() + spaces])
}

/// Wrap one line of text to `width` columns.
///
/// Bullets get a hanging indent equal to the bullet prefix width; other
/// indented lines keep their indent on every continuation line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(text) <= width {
        return vec![text.to_string()];
    }

    let (initial, body, hanging) = match bullet_prefix(text) {
        Some(prefix) => (
            prefix.to_string(),
            &text[prefix.len()..],
            " ".repeat(display_width(prefix)),
        ),
        None => {
            let body = text.trim_start();
            let indent = text[..text.len() - body.len()].to_string();
            (indent.clone(), body, indent)
        }
    };
    let width = width.max(display_width(&initial) + MIN_CONTENT_WIDTH / 2);
    let options = Options::new(width)
        .initial_indent(&initial)
        .subsequent_indent(&hanging);
    textwrap::wrap(body, &options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Wrap every line, keeping each continuation's kind.
pub fn wrap_lines(lines: &[Line], width: usize) -> Vec<Line> {
    lines
        .iter()
        .flat_map(|line| {
            if line.kind == LineKind::Banner {
                return vec![line.clone()];
            }
            wrap_text(&line.text, width)
                .into_iter()
                .map(|text| Line::new(line.kind, text))
                .collect()
        })
        .collect()
}

/// Substitute ASCII equivalents in every line.
pub fn sanitize_lines(lines: &mut [Line]) {
    for line in lines {
        if let Cow::Owned(text) = to_ascii(&line.text) {
            line.text = text;
        }
    }
}

/// Apply palette styling to a line.
pub fn paint_line(line: &Line, layout: &Layout) -> String {
    let use_color = layout.color;
    match line.kind {
        LineKind::Name | LineKind::Banner if use_color && layout.gradient => {
            palette::fmt_gradient(&line.text, palette::GRADIENT_FROM, palette::GRADIENT_TO)
        }
        LineKind::Name | LineKind::Banner => palette::fmt_name(&line.text, use_color),
        LineKind::Heading => palette::fmt_heading(&line.text, use_color),
        LineKind::Rule => palette::paint(&line.text, palette::rule(), use_color),
        LineKind::Entry => palette::paint(&line.text, palette::entry(), use_color),
        LineKind::Contact => paint_labelled(&line.text, use_color),
        LineKind::Body => paint_bullet(&line.text, use_color),
        LineKind::Blank => String::new(),
    }
}

/// Color the `Label:` part of a contact line.
fn paint_labelled(text: &str, use_color: bool) -> String {
    match text.split_once(": ") {
        Some((label, value)) if use_color => {
            format!("{} {value}", palette::fmt_label(&format!("{label}:"), true))
        }
        _ => text.to_string(),
    }
}

/// Color the bullet marker of a body line.
fn paint_bullet(text: &str, use_color: bool) -> String {
    match bullet_prefix(text) {
        Some(prefix) if use_color => format!(
            "{}{}",
            palette::paint(prefix, palette::bullet(), true),
            &text[prefix.len()..]
        ),
        _ => text.to_string(),
    }
}

/// Lay out lines for the terminal: banner, charset, wrapping, color and box.
pub fn present(lines: &[Line], layout: &Layout) -> String {
    let width = layout.content_width();
    let mut lines = if layout.banner {
        decorate::with_banner(lines, layout.charset, width)
    } else {
        lines.to_vec()
    };
    if layout.charset == Charset::Ascii {
        sanitize_lines(&mut lines);
    }
    let wrapped = wrap_lines(&lines, width);

    let rows = if layout.boxed {
        decorate::frame(&wrapped, layout)
    } else {
        wrapped
            .iter()
            .map(|line| paint_line(line, layout))
            .collect()
    };

    let mut output = rows.join("\n");
    output.push('\n');
    output
}
