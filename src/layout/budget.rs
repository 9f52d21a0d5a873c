//! Static character budgets and per-page line caps.
//!
//! Budgets shrink as the font grows. Adding a font size means adding a row here,
//! the paginator and title formatter read these tables and nothing else.

use serde::Serialize;

use crate::config::{Language, TemplateKind};
use crate::errors::{DeckError, Result};

/// Characters that fit on one line, for pure CJK and pure Latin text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharBudget {
    pub cjk: u32,
    pub latin: u32,
}

impl CharBudget {
    const fn new(cjk: u32, latin: u32) -> Self {
        Self { cjk, latin }
    }

    /// The budget in width units for the given language.
    pub fn for_language(&self, language: Language) -> f64 {
        match language {
            Language::Zh => self.cjk as f64,
            Language::En => self.latin as f64,
        }
    }
}

/// Font size used when a title size has no registered budget.
pub const FALLBACK_TITLE_FONT_SIZE: u32 = 48;

const TITLE_BUDGETS: &[(u32, CharBudget)] = &[
    (48, CharBudget::new(11, 22)),
    (44, CharBudget::new(13, 26)),
    (40, CharBudget::new(15, 30)),
    (36, CharBudget::new(17, 34)),
];

const WIDE_BODY_BUDGETS: &[(u32, CharBudget)] = &[
    (24, CharBudget::new(23, 46)),
    (20, CharBudget::new(28, 56)),
    (18, CharBudget::new(31, 62)),
    (16, CharBudget::new(35, 70)),
    (14, CharBudget::new(40, 80)),
    (12, CharBudget::new(46, 92)),
];

const NARROW_BODY_BUDGETS: &[(u32, CharBudget)] = &[
    (24, CharBudget::new(14, 28)),
    (20, CharBudget::new(17, 34)),
    (18, CharBudget::new(19, 38)),
    (16, CharBudget::new(21, 42)),
    (14, CharBudget::new(24, 48)),
    (12, CharBudget::new(28, 56)),
];

const FULL_TEXT_MAX_LINES: &[(u32, usize)] =
    &[(24, 13), (20, 15), (18, 18), (16, 20), (14, 24), (12, 28)];
const CUSTOM_MAX_LINES: &[(u32, usize)] =
    &[(24, 10), (20, 12), (18, 14), (16, 16), (14, 20), (12, 24)];
const TEXT_ABOVE_IMAGE_MAX_LINES: &[(u32, usize)] =
    &[(24, 8), (20, 9), (18, 11), (16, 12), (14, 14), (12, 16)];

fn lookup<T: Copy>(table: &[(u32, T)], font_size: u32) -> Option<T> {
    table
        .iter()
        .find(|(size, _)| *size == font_size)
        .map(|(_, value)| *value)
}

/// Body font sizes with a registered budget, largest first.
pub fn body_font_sizes() -> impl Iterator<Item = u32> {
    WIDE_BODY_BUDGETS.iter().map(|(size, _)| *size)
}

/// Character budget for a title at `font_size`, or `None` if the size is not registered.
pub fn title_budget(font_size: u32) -> Option<CharBudget> {
    lookup(TITLE_BUDGETS, font_size)
}

/// Character budget for a title, falling back to the 48pt row for unknown sizes.
pub fn title_budget_or_fallback(font_size: u32) -> CharBudget {
    title_budget(font_size).unwrap_or_else(|| {
        log::debug!(
            "No title budget for {}pt, measuring with the {}pt budget",
            font_size,
            FALLBACK_TITLE_FONT_SIZE
        );
        TITLE_BUDGETS[0].1
    })
}

/// Character budget for body text in a template at `font_size`.
pub fn body_budget(kind: TemplateKind, font_size: u32) -> Result<CharBudget> {
    let table = match kind {
        TemplateKind::FullText | TemplateKind::TextAboveImage => WIDE_BODY_BUDGETS,
        TemplateKind::Custom => NARROW_BODY_BUDGETS,
    };
    lookup(table, font_size).ok_or_else(|| {
        DeckError::Configuration(format!(
            "Font size {} has no character budget in template '{}' (expected one of 24, 20, 18, 16, 14, 12)",
            font_size, kind
        ))
    })
}

/// Maximum lines per page for a template at `font_size`.
pub fn max_lines(kind: TemplateKind, font_size: u32) -> Result<usize> {
    let table = match kind {
        TemplateKind::FullText => FULL_TEXT_MAX_LINES,
        TemplateKind::Custom => CUSTOM_MAX_LINES,
        TemplateKind::TextAboveImage => TEXT_ABOVE_IMAGE_MAX_LINES,
    };
    lookup(table, font_size).ok_or_else(|| {
        DeckError::Configuration(format!(
            "Font size {} has no line cap in template '{}'",
            font_size, kind
        ))
    })
}
