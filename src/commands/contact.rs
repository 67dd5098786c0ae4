//! Implementation of the `--contact` block.

use crate::{
    commands::{Context, write_output},
    error::Result,
    render::{Line, LineKind, contact_lines, present},
};

/// Execute the contact command.
pub async fn run(context: &mut Context) -> Result<()> {
    let resume = &context.resume;
    let fields = contact_lines(resume.location.as_deref(), &resume.contact);
    if fields.is_empty() {
        context
            .diagnostics
            .warn("No contact details listed in the resume.");
        return Ok(());
    }

    let mut lines = vec![Line::new(LineKind::Name, resume.name.clone()), Line::blank()];
    lines.extend(fields);
    write_output(&present(&lines, &context.layout))
}
