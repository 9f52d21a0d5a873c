// EMU (English Metric Unit): 914400 per inch, 12700 per point.
pub const EMU_PER_INCH: i64 = 914_400;
pub const EMU_PER_PT: i64 = 12_700;
// Image pixels are placed at 96 DPI.
pub const EMU_PER_PIXEL: f64 = 9_525.0;

// 10in x 7.5in (4:3) slide.
pub const DEFAULT_SLIDE_WIDTH_EMU: i64 = 10 * EMU_PER_INCH;
pub const DEFAULT_SLIDE_HEIGHT_EMU: i64 = 7 * EMU_PER_INCH + EMU_PER_INCH / 2;

// Heading repeated on every body slide.
pub const SLIDE_HEADING_FONT_SIZE_PT: u32 = 28;
pub const IMAGE_CAPTION_FONT_SIZE_PT: u32 = 14;
// Title slides add this much leading to each line.
pub const TITLE_LINE_SPACING_PT: u32 = 10;

/// Converts a length given in tenths of an inch to EMU.
pub const fn tenths_of_inch(tenths: i64) -> i64 {
    tenths * EMU_PER_INCH / 10
}

/// Converts a point size to EMU.
pub const fn pt_to_emu(points: u32) -> i64 {
    points as i64 * EMU_PER_PT
}
