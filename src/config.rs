//! Deck generation settings: body font size, language, line-cap policy and slide size.
//!
//! Settings come from code (`DeckConfig::default()`), a JSON document, or `DECKGEN_*`
//! environment variables layered over the defaults.

use serde::{Deserialize, Serialize};
use std::{env, fmt, fs, path::Path, str::FromStr};

use crate::errors::{DeckError, Result};
use crate::layout::budget;
use crate::layout::constants::{DEFAULT_SLIDE_HEIGHT_EMU, DEFAULT_SLIDE_WIDTH_EMU};

/// Default number of lines placed on one page of body text.
pub const DEFAULT_LINES_PER_PAGE: usize = 10;
/// Default body font size in points.
pub const DEFAULT_BODY_FONT_SIZE: u32 = 18;
/// Font size used for section header slides.
pub const DEFAULT_SECTION_FONT_SIZE: u32 = 36;

/// The three body-layout shapes. Each has its own character budget table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Title plus a full-width text box.
    FullText,
    /// Text box above a landscape image.
    TextAboveImage,
    /// Text on the left 60%, image on the right 40%.
    Custom,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::FullText => "full_text",
            TemplateKind::TextAboveImage => "text_above_image",
            TemplateKind::Custom => "custom",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "full_text" => Ok(TemplateKind::FullText),
            "text_above_image" => Ok(TemplateKind::TextAboveImage),
            "custom" => Ok(TemplateKind::Custom),
            other => Err(DeckError::Configuration(format!(
                "Template kind '{}' has no registered character budget (expected full_text, text_above_image or custom)",
                other
            ))),
        }
    }
}

/// Selects which half of a character budget applies. Supplied by the caller, never detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Zh => f.write_str("zh"),
            Language::En => f.write_str("en"),
        }
    }
}

impl FromStr for Language {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            other => Err(DeckError::Configuration(format!(
                "Language '{}' is not supported (expected zh or en)",
                other
            ))),
        }
    }
}

/// How many lines a page of body text may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// The same cap for every template and font size.
    Fixed(usize),
    /// Look the cap up in the `(template_kind, font_size)` max-lines table.
    ByTemplate,
}

impl Default for LineCap {
    fn default() -> Self {
        LineCap::Fixed(DEFAULT_LINES_PER_PAGE)
    }
}

impl LineCap {
    /// Resolves the per-page line cap for a template and body font size.
    pub fn resolve(&self, kind: TemplateKind, font_size: u32) -> Result<usize> {
        match self {
            LineCap::Fixed(0) => Err(DeckError::Configuration(
                "Fixed line cap must be at least 1".to_string(),
            )),
            LineCap::Fixed(n) => Ok(*n),
            LineCap::ByTemplate => budget::max_lines(kind, font_size),
        }
    }
}

impl FromStr for LineCap {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("by_template") {
            return Ok(LineCap::ByTemplate);
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(LineCap::Fixed(n)),
            _ => Err(DeckError::Configuration(format!(
                "Line cap '{}' must be a positive integer or 'by_template'",
                s
            ))),
        }
    }
}

/// Slide size in EMU (914400 per inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideGeometry {
    pub width_emu: i64,
    pub height_emu: i64,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            width_emu: DEFAULT_SLIDE_WIDTH_EMU,
            height_emu: DEFAULT_SLIDE_HEIGHT_EMU,
        }
    }
}

/// Settings for one deck generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckConfig {
    /// Body font size, one of 24, 20, 18, 16, 14, 12.
    pub font_size: u32,
    pub language: Language,
    /// Overrides the length-derived font size of the deck title slide.
    pub title_font_size: Option<u32>,
    pub section_font_size: u32,
    pub line_cap: LineCap,
    pub slide: SlideGeometry,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_BODY_FONT_SIZE,
            language: Language::default(),
            title_font_size: None,
            section_font_size: DEFAULT_SECTION_FONT_SIZE,
            line_cap: LineCap::default(),
            slide: SlideGeometry::default(),
        }
    }
}

impl DeckConfig {
    /// Parses a JSON configuration document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Builds a configuration from `DECKGEN_FONT_SIZE`, `DECKGEN_LANGUAGE` and
    /// `DECKGEN_LINE_CAP`. Unset variables keep their defaults.
    ///
    /// Call `dotenvy::dotenv().ok()` first if settings live in a `.env` file.
    pub fn from_env() -> Result<Self> {
        let mut config = DeckConfig::default();

        if let Ok(raw) = env::var("DECKGEN_FONT_SIZE") {
            config.font_size = raw.trim().parse::<u32>().map_err(|_| {
                DeckError::Configuration(format!("DECKGEN_FONT_SIZE '{}' is not a number", raw))
            })?;
        }
        if let Ok(raw) = env::var("DECKGEN_LANGUAGE") {
            config.language = raw.parse()?;
        }
        if let Ok(raw) = env::var("DECKGEN_LINE_CAP") {
            config.line_cap = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the body font size has a budget in every template and the
    /// line cap resolves.
    pub fn validate(&self) -> Result<()> {
        for kind in [
            TemplateKind::FullText,
            TemplateKind::TextAboveImage,
            TemplateKind::Custom,
        ] {
            budget::body_budget(kind, self.font_size)?;
            self.line_cap.resolve(kind, self.font_size)?;
        }
        if self.slide.width_emu <= 0 || self.slide.height_emu <= 0 {
            return Err(DeckError::Configuration(format!(
                "Slide size {}x{} EMU must be positive",
                self.slide.width_emu, self.slide.height_emu
            )));
        }
        Ok(())
    }
}
