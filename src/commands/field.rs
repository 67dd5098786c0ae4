//! Implementation of single-field lookups such as `--email`.

use crate::{
    commands::{Context, write_output},
    error::Result,
    resume::value_to_text,
};

/// Fields that can be printed on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Location.
    Location,
    /// GitHub profile.
    Github,
    /// Personal site.
    Portfolio,
}

impl Field {
    /// Dotted record path holding the field.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "contact.email",
            Self::Phone => "contact.phone",
            Self::Location => "location",
            Self::Github => "contact.github",
            Self::Portfolio => "contact.portfolio",
        }
    }

    /// Human-readable field name.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email address",
            Self::Phone => "phone number",
            Self::Location => "location",
            Self::Github => "GitHub profile",
            Self::Portfolio => "portfolio",
        }
    }
}

/// Execute a field lookup.
pub async fn run(context: &mut Context, field: Field) -> Result<()> {
    match lookup(context, field) {
        Some(value) => write_output(&format!("{}\n", context.charset_text(&value))),
        None => {
            context
                .diagnostics
                .warn(format!("No {} listed in the resume.", field.label()));
            Ok(())
        }
    }
}

/// Resolve a field to its text, treating empty strings as absent.
fn lookup(context: &Context, field: Field) -> Option<String> {
    context
        .resume
        .get_by_path(field.path())
        .map(|value| value_to_text(&value))
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Field, lookup};
    use crate::{
        render::Charset,
        resume::Resume,
        testutil::{plain_context, sample_resume},
    };

    #[test]
    fn resolves_every_field() {
        let context = plain_context(sample_resume());
        assert_eq!(lookup(&context, Field::Name).as_deref(), Some("Sam Rivera"));
        assert_eq!(lookup(&context, Field::Email).as_deref(), Some("sam@example.com"));
        assert_eq!(lookup(&context, Field::Location).as_deref(), Some("Austin, TX"));
        assert_eq!(
            lookup(&context, Field::Portfolio).as_deref(),
            Some("https://samrivera.dev")
        );
    }

    #[test]
    fn ascii_layout_sanitizes_values() {
        let mut resume = sample_resume();
        resume.location = Some("Austin — “Texas”".to_string());
        let mut context = plain_context(resume);
        let value = lookup(&context, Field::Location).expect("location");
        assert_eq!(context.charset_text(&value), "Austin — “Texas”");

        context.layout.charset = Charset::Ascii;
        assert_eq!(context.charset_text(&value), "Austin - \"Texas\"");
    }

    #[test]
    fn missing_fields_are_none() {
        let context = plain_context(Resume::default());
        assert_eq!(lookup(&context, Field::Name), None);
        assert_eq!(lookup(&context, Field::Github), None);
    }
}
