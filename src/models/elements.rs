// src/models/elements.rs

use serde::{Deserialize, Serialize};

use crate::models::common::{AffineTransform, Size};
use crate::models::image::Image;
use crate::models::shape::Shape;

/// The specific kind of PageElement.
/// The JSON representation uses the kind as the key (e.g., "shape": {...}, "image": {...}).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageElementKind {
    Shape(Shape),
    Image(Image),
}

/// A visual element placed on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageElement {
    /// Unique within the presentation.
    pub object_id: String,
    pub size: Size,
    pub transform: AffineTransform,
    #[serde(flatten)]
    pub element_kind: PageElementKind,
}

impl PageElement {
    /// The element's shape, if it is one.
    pub fn as_shape(&self) -> Option<&Shape> {
        match &self.element_kind {
            PageElementKind::Shape(shape) => Some(shape),
            PageElementKind::Image(_) => None,
        }
    }
}
