//! Splits body text into slide-sized pages.
//!
//! Paragraphs (explicit line breaks) are never merged. Inside a paragraph, CJK
//! ideographs and whitespace-delimited words are atomic tokens that are packed
//! greedily into lines under the character budget of the template, font size and
//! language. Lines are then grouped into pages of at most `line_cap` lines.

use log::debug;
use serde::Serialize;

use super::budget;
use super::width::{estimate_width, is_cjk};
use crate::config::{Language, LineCap, TemplateKind};
use crate::errors::Result;

/// One slide's worth of body text. Blank lines separate paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub lines: Vec<String>,
}

impl Page {
    /// The page text with lines joined by newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lines carrying text, skipping paragraph separators.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
    }
}

/// Everything that decides how body text is paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub template_kind: TemplateKind,
    pub font_size: u32,
    pub language: Language,
    pub line_cap: LineCap,
}

impl PaginationOptions {
    pub fn new(template_kind: TemplateKind, font_size: u32, language: Language) -> Self {
        Self {
            template_kind,
            font_size,
            language,
            line_cap: LineCap::default(),
        }
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }
}

/// An atomic piece of a paragraph and whether whitespace preceded it in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    spaced: bool,
}

fn tokenize(paragraph: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word: Option<(usize, bool)> = None;
    let mut pending_space = false;

    for (i, c) in paragraph.char_indices() {
        if c.is_whitespace() || is_cjk(c) {
            if let Some((start, spaced)) = word.take() {
                tokens.push(Token {
                    text: &paragraph[start..i],
                    spaced,
                });
            }
            if c.is_whitespace() {
                pending_space = true;
            } else {
                tokens.push(Token {
                    text: &paragraph[i..i + c.len_utf8()],
                    spaced: pending_space,
                });
                pending_space = false;
            }
        } else if word.is_none() {
            word = Some((i, pending_space));
            pending_space = false;
        }
    }
    if let Some((start, spaced)) = word {
        tokens.push(Token {
            text: &paragraph[start..],
            spaced,
        });
    }
    tokens
}

/// Collects lines and cuts them into pages once the cap is reached.
struct PageBuilder {
    pages: Vec<Page>,
    lines: Vec<String>,
    line_cap: usize,
}

impl PageBuilder {
    fn new(line_cap: usize) -> Self {
        Self {
            pages: Vec::new(),
            lines: Vec::new(),
            line_cap,
        }
    }

    fn push_line(&mut self, line: String) {
        self.lines.push(line);
        if self.lines.len() >= self.line_cap {
            self.flush();
        }
    }

    /// Ends a paragraph with a blank line, unless the page is empty or already ends blank.
    fn push_separator(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.push_line(String::new());
        }
    }

    fn flush(&mut self) {
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }
        if !self.lines.is_empty() {
            self.pages.push(Page {
                lines: std::mem::take(&mut self.lines),
            });
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.flush();
        self.pages
    }
}

/// Paginates `text` with the default line cap of 10 lines per page.
///
/// Fails with a configuration error when the template has no budget for `font_size`.
pub fn paginate(
    text: &str,
    template_kind: TemplateKind,
    font_size: u32,
    language: Language,
) -> Result<Vec<Page>> {
    paginate_with(
        text,
        &PaginationOptions::new(template_kind, font_size, language),
    )
}

/// Paginates `text` according to `options`. Empty text yields no pages.
pub fn paginate_with(text: &str, options: &PaginationOptions) -> Result<Vec<Page>> {
    let budget = budget::body_budget(options.template_kind, options.font_size)?
        .for_language(options.language);
    let line_cap = options
        .line_cap
        .resolve(options.template_kind, options.font_size)?;

    let mut builder = PageBuilder::new(line_cap);

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0.0;

        for token in tokenize(paragraph) {
            let gap = if token.spaced && !line.is_empty() {
                " "
            } else {
                ""
            };
            let token_width = estimate_width(gap) + estimate_width(token.text);

            if line.is_empty() || line_width + token_width <= budget {
                line.push_str(gap);
                line.push_str(token.text);
                line_width += token_width;
            } else {
                builder.push_line(std::mem::take(&mut line));
                line.push_str(token.text);
                line_width = estimate_width(token.text);
            }
        }

        if !line.is_empty() {
            builder.push_line(line);
        }
        builder.push_separator();
    }

    let pages = builder.finish();
    debug!(
        "Paginated {} chars into {} page(s) ({}, {}pt, {}, budget {}, cap {})",
        text.chars().count(),
        pages.len(),
        options.template_kind,
        options.font_size,
        options.language,
        budget,
        line_cap
    );
    Ok(pages)
}
