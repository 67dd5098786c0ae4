//! ASCII substitution for terminals without Unicode support.

use std::borrow::Cow;

/// Replace typographic and box-drawing characters with ASCII equivalents.
///
/// Characters without a known substitute are kept. Already-ASCII input is
/// returned unchanged, which makes the function idempotent.
pub fn to_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match substitute(ch) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(ch),
        }
    }
    Cow::Owned(output)
}

/// Look up the ASCII replacement for a single character.
fn substitute(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        '•' | '·' | '▪' | '◦' | '‣' | '●' => "-",
        '‐' | '‑' | '‒' | '–' | '—' | '―' | '−' => "-",
        '‘' | '’' | '‚' | '′' => "'",
        '“' | '”' | '„' | '″' => "\"",
        '…' => "...",
        '\u{a0}' | '\u{2009}' | '\u{202f}' => " ",
        '─' | '━' | '═' => "-",
        '│' | '┃' | '║' => "|",
        '╭' | '╮' | '╰' | '╯' | '┌' | '┐' | '└' | '┘' | '┼' | '├' | '┤' | '┬'
        | '┴' => "+",
        '→' => "->",
        '←' => "<-",
        '©' => "(c)",
        _ => return None,
    };
    Some(replacement)
}
