use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while turning structured text into a slide deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// An unknown template kind, font size or language was requested.
    /// These are closed sets, so this always points at a caller bug.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input contained more `[image]` markers than images were supplied.
    #[error("Missing image for [image] marker on line {line_number}: {line}")]
    Resource { line_number: usize, line: String },

    /// The slide geometry leaves no room for the body text box of a template.
    #[error(
        "Text box for template '{template}' is {text_box_width_emu}x{text_box_height_emu} EMU on a \
         {slide_width_emu}x{slide_height_emu} EMU slide; reduce the image area or enlarge the slide"
    )]
    Layout {
        template: String,
        text_box_width_emu: i64,
        text_box_height_emu: i64,
        slide_width_emu: i64,
        slide_height_emu: i64,
    },

    /// The rendering backend could not read an image's pixel size.
    #[error("Failed to probe image size of '{}': {source}", path.display())]
    ImageProbe {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An edit on a `DeckDraft` referenced a block that cannot take it.
    #[error("Invalid draft edit: {0}")]
    InvalidEdit(String),

    /// An I/O error occurred, usually while saving the deck or reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising the deck document or parsing a JSON configuration failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
