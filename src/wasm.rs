//! Browser bindings for previewing pagination while a deck is edited.
//!
//! Each export has a plain Rust counterpart returning [`crate::Result`] so the same
//! logic is testable off the browser.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{Language, TemplateKind};
use crate::errors::Result;
use crate::layout::{format_title, paginate, Page};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PagePreview<'a> {
    template_kind: TemplateKind,
    font_size: u32,
    language: Language,
    pages: &'a [Page],
}

/// Paginates `text` and serialises the result as JSON.
pub fn paginate_to_json(
    text: &str,
    template_kind: &str,
    font_size: u32,
    language: &str,
) -> Result<String> {
    let template_kind: TemplateKind = template_kind.parse()?;
    let language: Language = language.parse()?;
    let pages = paginate(text, template_kind, font_size, language)?;
    Ok(serde_json::to_string(&PagePreview {
        template_kind,
        font_size,
        language,
        pages: &pages,
    })?)
}

/// `{"templateKind", "fontSize", "language", "pages": [{"lines": [...]}]}` for the editor.
#[wasm_bindgen]
pub fn paginate_preview(
    text: &str,
    template_kind: &str,
    font_size: u32,
    language: &str,
) -> std::result::Result<String, JsValue> {
    paginate_to_json(text, template_kind, font_size, language)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Font size and wrapped lines of a title, as JSON.
#[wasm_bindgen]
pub fn title_preview(title: &str) -> String {
    // TitleLayout holds only a number and strings.
    serde_json::to_string(&format_title(title, None)).unwrap_or_default()
}

/// Routes `log` output to the browser console and installs the panic hook.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DeckError;

    #[test]
    fn test_paginate_to_json_shape() {
        let json = paginate_to_json("你好\n世界", "full_text", 18, "zh").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["templateKind"], "full_text");
        assert_eq!(value["fontSize"], 18);
        assert_eq!(value["language"], "zh");
        assert_eq!(
            value["pages"][0]["lines"],
            serde_json::json!(["你好", "", "世界"])
        );
    }

    #[test]
    fn test_paginate_to_json_rejects_unknown_names() {
        assert!(matches!(
            paginate_to_json("x", "sidebar", 18, "zh"),
            Err(DeckError::Configuration(_))
        ));
        assert!(matches!(
            paginate_to_json("x", "custom", 18, "de"),
            Err(DeckError::Configuration(_))
        ));
    }

    #[test]
    fn test_title_preview() {
        let value: serde_json::Value = serde_json::from_str(&title_preview("项目汇报")).unwrap();
        assert_eq!(value["fontSize"], 48);
        assert_eq!(value["lines"], serde_json::json!(["项目汇报"]));
    }
}
