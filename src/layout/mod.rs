//! The layout engine: width estimation, title wrapping and body pagination.
//!
//! Everything here is pure and deterministic. Text is measured with a fixed-width
//! approximation (CJK = 1 unit, anything else = 0.5 unit) instead of font metrics,
//! so the same input always produces the same pages.

pub mod budget;
pub mod constants;
pub mod paginator;
pub mod title;
pub mod width;

pub use budget::{body_budget, max_lines, title_budget, CharBudget};
pub use paginator::{paginate, paginate_with, Page, PaginationOptions};
pub use title::{choose_title_font_size, format_title, wrap_title, TitleLayout};
pub use width::estimate_width;
