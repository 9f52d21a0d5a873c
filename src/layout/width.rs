//! Approximate rendered width of mixed CJK / Latin text.
//!
//! Real font metrics are not consulted. A CJK ideograph counts as one unit and
//! every other character as half a unit, which is close enough for deciding
//! where a line of slide text should break.

const CJK_WIDTH: f64 = 1.0;
const NARROW_WIDTH: f64 = 0.5;

/// Returns true for characters in the CJK Unified Ideographs block (U+4E00..=U+9FFF).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Width of a single character in layout units.
pub fn char_width(c: char) -> f64 {
    if is_cjk(c) {
        CJK_WIDTH
    } else {
        NARROW_WIDTH
    }
}

/// Estimates the width of `text` in layout units.
pub fn estimate_width(text: &str) -> f64 {
    text.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_counts_full_width() {
        assert_eq!(estimate_width("中文标题"), 4.0);
        assert_eq!(estimate_width("abcd"), 2.0);
        assert_eq!(estimate_width("Rust 语言"), 4.5);
        assert_eq!(estimate_width(""), 0.0);
    }

    #[test]
    fn test_full_width_punctuation_is_not_an_ideograph() {
        // U+FF1A (full-width colon) sits outside the ideograph block.
        assert!(!is_cjk('：'));
        assert_eq!(estimate_width("："), 0.5);
        assert!(is_cjk('一'));
        assert!(is_cjk('\u{9fff}'));
        assert!(!is_cjk('\u{a000}'));
    }
}
