use serde::{Deserialize, Serialize};

use crate::models::common::Size;
use crate::models::page::Slide;

/// A generated slide deck, serialisable as a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub presentation_id: String,

    /// The title of the presentation, taken from the deck title block when present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    /// The size of every slide.
    pub page_size: Size,

    pub slides: Vec<Slide>,

    /// The language of the body text ("zh" or "en").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locale: Option<String>,
}
