// demos/preview_pages.rs
//
// Prints how a body text paginates in every template at the configured font size.
// Usage: cargo run --example preview_pages -- <body.txt>

use anyhow::Context;
use deckgen_tools::{
    layout::{max_lines, paginate_with, PaginationOptions},
    DeckConfig, TemplateKind,
};
use std::{env, fs};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = env::args()
        .nth(1)
        .context("Usage: cargo run --example preview_pages -- <body.txt>")?;
    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let config = DeckConfig::from_env()?;

    for kind in [
        TemplateKind::FullText,
        TemplateKind::TextAboveImage,
        TemplateKind::Custom,
    ] {
        let options = PaginationOptions::new(kind, config.font_size, config.language)
            .with_line_cap(config.line_cap);
        let pages = paginate_with(&text, &options)?;
        println!(
            "== {} @ {}pt ({}): {} page(s), table cap {} lines ==",
            kind,
            config.font_size,
            config.language,
            pages.len(),
            max_lines(kind, config.font_size)?
        );
        for (index, page) in pages.iter().enumerate() {
            println!("-- page {} --", index + 1);
            println!("{}", page.text());
        }
    }
    Ok(())
}
