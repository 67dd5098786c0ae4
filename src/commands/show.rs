//! Implementation of the default full-resume display.

use crate::{
    commands::{Context, write_output},
    error::Result,
    render::{present, resume_lines},
};

/// Execute the show command.
pub async fn run(context: &mut Context) -> Result<()> {
    let lines = resume_lines(&context.resume);
    write_output(&present(&lines, &context.layout))
}
