use serde::{Deserialize, Serialize};

/// A PageElement kind representing a picture inserted from a local file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Path of the source file at the time the deck was built.
    pub source_path: String,
}
