//! Title sizing and wrapping.
//!
//! Titles are measured by character count against the CJK half of the title budget,
//! unlike body text which is measured by estimated width.

use serde::Serialize;

use super::budget;
use super::width::is_cjk;

/// Separators a title line may end on without being broken apart.
const TITLE_SEPARATORS: [&str; 3] = ["：", ": ", "——"];

/// A title ready to be drawn: its font size and wrapped lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleLayout {
    pub font_size: u32,
    pub lines: Vec<String>,
}

/// Picks a title font size from the title's character count.
pub fn choose_title_font_size(title_length: usize) -> u32 {
    match title_length {
        0..=11 => 48,
        12..=13 => 44,
        14..=15 => 40,
        _ => 36,
    }
}

/// Sizes and wraps a title. `font_size` overrides the length-derived size.
pub fn format_title(title: &str, font_size: Option<u32>) -> TitleLayout {
    let font_size = font_size.unwrap_or_else(|| choose_title_font_size(title.chars().count()));
    TitleLayout {
        font_size,
        lines: wrap_title(title, font_size),
    }
}

/// Earliest separator in `chars` as `(start, end)` char offsets, `end` exclusive.
fn find_separator(chars: &[char]) -> Option<(usize, usize)> {
    TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| {
            let sep: Vec<char> = sep.chars().collect();
            chars
                .windows(sep.len())
                .position(|window| window == sep.as_slice())
                .map(|start| (start, start + sep.len()))
        })
        .min_by_key(|(start, _)| *start)
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !is_cjk(c)
}

/// Where to cut `rest` when the next run does not fit in `room` chars.
///
/// Returns 0 when nothing more fits on the current line.
fn budget_cut(
    rest: &[char],
    room: usize,
    separator: Option<(usize, usize)>,
    line_is_empty: bool,
) -> usize {
    let mut cut = room.min(rest.len());
    if let Some((start, end)) = separator {
        if start < cut && cut < end {
            cut = start;
        }
    }
    if cut == 0
        || cut >= rest.len()
        || !is_word_char(rest[cut - 1])
        || !is_word_char(rest[cut])
    {
        return cut;
    }
    // The cut would split a Latin word; back up to the word's start.
    let word_start = rest[..cut]
        .iter()
        .rposition(|c| !is_word_char(*c))
        .map_or(0, |i| i + 1);
    if word_start > 0 {
        word_start
    } else if !line_is_empty {
        0
    } else {
        // A word longer than the whole line stays in one piece.
        rest.iter()
            .position(|c| !is_word_char(*c))
            .unwrap_or(rest.len())
    }
}

/// Wraps `title` into lines of at most the title budget for `font_size`.
///
/// A run ending in a separator is kept whole when it fits the current line.
/// Otherwise the title is cut on the budget, never inside a separator or a
/// Latin word. Always returns at least one line.
pub fn wrap_title(title: &str, font_size: u32) -> Vec<String> {
    let budget = budget::title_budget_or_fallback(font_size).cjk as usize;
    let chars: Vec<char> = title.chars().collect();

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    let mut pos = 0usize;

    let flush = |lines: &mut Vec<String>, current: &mut String| {
        let line = current.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
        current.clear();
    };

    while pos < chars.len() {
        let rest = &chars[pos..];
        let room = budget - current_len;

        let take = match find_separator(rest) {
            Some((_, end)) if end <= room => end,
            separator => budget_cut(rest, room, separator, current_len == 0),
        };

        if take == 0 {
            flush(&mut lines, &mut current);
            current_len = 0;
            continue;
        }

        current.extend(&rest[..take]);
        current_len += take;
        pos += take;

        if current_len >= budget {
            flush(&mut lines, &mut current);
            current_len = 0;
        }
    }
    flush(&mut lines, &mut current);

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
