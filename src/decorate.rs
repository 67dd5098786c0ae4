//! Box borders, the large-text name banner and terminal capability checks.
//!
//! Everything here is cosmetic. The banner gives up and leaves the plain name
//! in place whenever it cannot be drawn.

use std::env;

use textwrap::core::display_width;

use crate::{
    palette,
    render::{Charset, Layout, Line, LineKind, paint_line},
};

/// Narrowest inner width of a box.
pub const MIN_BOX_WIDTH: usize = 20;

/// Height of a banner glyph in rows.
const GLYPH_ROWS: usize = 3;

/// Border characters for one charset.
#[derive(Debug, Clone, Copy)]
struct BorderChars {
    /// Top-left corner.
    top_left: char,
    /// Top-right corner.
    top_right: char,
    /// Bottom-left corner.
    bottom_left: char,
    /// Bottom-right corner.
    bottom_right: char,
    /// Horizontal edge.
    horizontal: char,
    /// Vertical edge.
    vertical: char,
}

impl BorderChars {
    /// Return the border set for a charset.
    fn for_charset(charset: Charset) -> Self {
        match charset {
            Charset::Unicode => Self {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            Charset::Ascii => Self {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
        }
    }
}

/// Draw a border around wrapped lines, styling each line.
///
/// The box is sized to the widest line, never narrower than
/// [`MIN_BOX_WIDTH`].
pub fn frame(lines: &[Line], layout: &Layout) -> Vec<String> {
    let chars = BorderChars::for_charset(layout.charset);
    let inner = lines
        .iter()
        .map(|line| display_width(&line.text))
        .max()
        .unwrap_or(0)
        .max(MIN_BOX_WIDTH);

    let edge = chars.horizontal.to_string().repeat(inner + 2);
    let border = |text: String| palette::paint(&text, palette::border(), layout.color);
    let vertical = border(chars.vertical.to_string());

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(border(format!("{}{edge}{}", chars.top_left, chars.top_right)));
    for line in lines {
        let padding = " ".repeat(inner - display_width(&line.text));
        rows.push(format!(
            "{vertical} {}{padding} {vertical}",
            paint_line(line, layout)
        ));
    }
    rows.push(border(format!(
        "{}{edge}{}",
        chars.bottom_left, chars.bottom_right
    )));
    rows
}

/// Replace name lines with banner rows when the banner can be drawn.
pub fn with_banner(lines: &[Line], charset: Charset, width: usize) -> Vec<Line> {
    let mut output = Vec::with_capacity(lines.len() + GLYPH_ROWS);
    for line in lines {
        let banner = (line.kind == LineKind::Name)
            .then(|| banner_rows(&line.text, charset, width))
            .flatten();
        match banner {
            Some(rows) => {
                output.extend(rows.into_iter().map(|row| Line::new(LineKind::Banner, row)));
            }
            None => output.push(line.clone()),
        }
    }
    output
}

/// Render text in the block font, or `None` when it cannot be drawn.
///
/// Fails for ASCII output, unsupported characters, empty text and banners
/// wider than `width`.
pub fn banner_rows(text: &str, charset: Charset, width: usize) -> Option<Vec<String>> {
    if charset == Charset::Ascii || text.trim().is_empty() {
        return None;
    }

    let mut rows = vec![String::new(); GLYPH_ROWS];
    for (index, ch) in text.trim().chars().enumerate() {
        let glyph = glyph(ch.to_ascii_uppercase())?;
        for (row, part) in rows.iter_mut().zip(glyph) {
            if index > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }

    let rows: Vec<String> = rows
        .into_iter()
        .map(|row| row.trim_end().to_string())
        .collect();
    let widest = rows.iter().map(|row| display_width(row)).max().unwrap_or(0);
    (widest <= width).then_some(rows)
}

/// Look up the three rows of a block-font glyph.
fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch {
        'A' => ["▄▀▄", "█▀█", "▀ ▀"],
        'B' => ["█▀▄", "█▀▄", "▀▀ "],
        'C' => ["▄▀▀", "█  ", " ▀▀"],
        'D' => ["█▀▄", "█ █", "▀▀ "],
        'E' => ["█▀▀", "█▀▀", "▀▀▀"],
        'F' => ["█▀▀", "█▀ ", "▀  "],
        'G' => ["▄▀▀", "█ ▄", " ▀▀"],
        'H' => ["█ █", "█▀█", "▀ ▀"],
        'I' => ["▀█▀", " █ ", "▀▀▀"],
        'J' => ["  █", "▄ █", " ▀ "],
        'K' => ["█ █", "█▀▄", "▀ ▀"],
        'L' => ["█  ", "█  ", "▀▀▀"],
        'M' => ["█▄█", "█ █", "▀ ▀"],
        'N' => ["█▀▄", "█ █", "▀ ▀"],
        'O' => ["▄▀▄", "█ █", " ▀ "],
        'P' => ["█▀▄", "█▀ ", "▀  "],
        'Q' => ["▄▀▄", "█ █", " ▀▄"],
        'R' => ["█▀▄", "█▀▄", "▀ ▀"],
        'S' => ["▄▀▀", " ▀▄", "▀▀ "],
        'T' => ["▀█▀", " █ ", " ▀ "],
        'U' => ["█ █", "█ █", " ▀ "],
        'V' => ["█ █", "▀▄▀", " ▀ "],
        'W' => ["█ █", "█▄█", "▀ ▀"],
        'X' => ["▀▄▀", "▄▀▄", "▀ ▀"],
        'Y' => ["█ █", " █ ", " ▀ "],
        'Z' => ["▀▀█", "▄▀ ", "▀▀▀"],
        ' ' => ["  ", "  ", "  "],
        '-' => ["   ", "▀▀▀", "   "],
        '.' => [" ", " ", "▀"],
        '\'' => ["▀", " ", " "],
        _ => return None,
    };
    Some(rows)
}

/// Return true when the terminal advertises 24-bit color.
pub fn supports_truecolor() -> bool {
    env::var("COLORTERM")
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value == "truecolor" || value == "24bit"
        })
        .unwrap_or(false)
}
