//! Turns structured deck text and an ordered image set into paginated slides.
//!
//! The pipeline is [`parser::parse_content`] → [`composer::build_deck`] → a
//! [`backend::SlideBackend`]. [`generate_deck`] runs all of it and saves the result.

pub mod backend;
pub mod blocks;
pub mod composer;
pub mod config;
pub mod converters;
pub mod draft;
pub mod errors;
pub mod layout;
pub mod models;
pub mod parser;
pub mod wasm;

pub use backend::{ModelBackend, SlideBackend};
pub use blocks::{ContentBlock, ImageRef, ImageSet};
pub use composer::{build_deck, compose_block, generate_deck, SlideLayoutPlan};
pub use config::{DeckConfig, Language, LineCap, TemplateKind};
pub use converters::markdown;
pub use draft::DeckDraft;
pub use errors::{DeckError, Result};
pub use layout::{choose_title_font_size, estimate_width, paginate, wrap_title, Page};
pub use models::presentation::Presentation;
pub use parser::parse_content;
