//! Implementation of the export commands: JSON, JSON Resume and plain text.

use std::path::{Path, PathBuf};

use crate::{
    commands::{Context, write_output},
    error::{Error, Result},
    json_resume::JsonResume,
    legacy,
    paths::{display_path, expand_path},
};

/// Print the resume record as pretty JSON.
pub async fn json(context: &mut Context) -> Result<()> {
    let mut output = serde_json::to_string_pretty(&context.resume)
        .map_err(|error| Error::Serialize { source: error })?;
    output.push('\n');
    write_output(&output)
}

/// Print the resume in the JSON Resume schema.
pub async fn json_resume(context: &mut Context) -> Result<()> {
    let document = JsonResume::from_resume(&context.resume);
    let mut output = serde_json::to_string_pretty(&document)
        .map_err(|error| Error::Serialize { source: error })?;
    output.push('\n');
    write_output(&output)
}

/// Print the plain-text export to stdout.
pub async fn download(context: &mut Context) -> Result<()> {
    write_output(&legacy::to_text(&context.resume))
}

/// Write the plain-text export to a file.
///
/// An empty `file` picks a name derived from the person's name. Write
/// failures are reported as warnings and do not fail the run.
pub async fn save(context: &mut Context, file: &str) -> Result<()> {
    let path = save_path(file, &context.resume.name)?;
    let contents = legacy::to_text(&context.resume);
    match tokio::fs::write(&path, contents).await {
        Ok(()) => write_output(&format!("Saved resume to {}\n", display_path(&path))),
        Err(error) => {
            let error = Error::SaveWrite {
                path,
                source: error,
            };
            context.diagnostics.warn(error.to_string());
            Ok(())
        }
    }
}

/// Resolve the destination for `--save`.
fn save_path(file: &str, name: &str) -> Result<PathBuf> {
    let file = file.trim();
    if file.is_empty() {
        return Ok(PathBuf::from(default_file_name(name)));
    }
    expand_path(file, Path::new("."))
}

/// Build `<slug>-resume.txt` from a person's name.
pub fn default_file_name(name: &str) -> String {
    let slug = name
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "resume-export.txt".to_string()
    } else {
        format!("{slug}-resume.txt")
    }
}
