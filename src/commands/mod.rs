//! CLI command implementations.

use std::{
    borrow::Cow,
    env,
    io::{self, IsTerminal, Write},
};

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
    render::{Charset, Layout},
    resume::Resume,
    sanitize::to_ascii,
};

/// Output color handling selection.
#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    /// Colorize only when output is a TTY and `NO_COLOR` is unset.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorChoice {
    /// Determine whether color output should be enabled.
    pub(crate) fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Shared state handed to every command.
#[derive(Debug)]
pub struct Context {
    /// The loaded resume.
    pub(crate) resume: Resume,
    /// Resolved presentation settings.
    pub(crate) layout: Layout,
    /// Warning collector for the run.
    pub(crate) diagnostics: Diagnostics,
}

impl Context {
    /// Apply the output charset to record text printed outside the renderer.
    pub(crate) fn charset_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.layout.charset {
            Charset::Ascii => to_ascii(text),
            Charset::Unicode => Cow::Borrowed(text),
        }
    }
}

/// Write output to stdout.
pub(crate) fn write_output(output: &str) -> Result<()> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|error| Error::Output { source: error })
}

// Command modules are ordered alphabetically - maintain this order.
/// Contact block command.
pub mod contact;
/// JSON, JSON Resume and plain-text exports.
pub mod export;
/// Single-field commands such as `--email`.
pub mod field;
/// Link listing command.
pub mod links;
/// Section commands, including project selection.
pub mod section;
/// Full resume display.
pub mod show;
