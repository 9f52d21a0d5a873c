// src/models/page.rs

use serde::{Deserialize, Serialize};

use crate::models::elements::PageElement;

/// A slide in a presentation. Slides are always blank-layout: every element is
/// positioned absolutely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub object_id: String,
    pub page_elements: Vec<PageElement>,
}
