// demos/generate_deck.rs
//
// Usage: cargo run --example generate_deck -- <input.txt> <output.json> [image ...]
//
// Images are consumed by `[image]` markers in the order given; each is named after
// its file stem. Settings come from DECKGEN_* variables (a .env file is honoured).

use anyhow::{bail, Context};
use deckgen_tools::{generate_deck, markdown, DeckConfig, ImageSet, ModelBackend};
use std::{env, fs, path::PathBuf};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("Usage: cargo run --example generate_deck -- <input.txt> <output.json> [image ...]");
    }
    let input = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);

    let images: ImageSet = args[2..]
        .iter()
        .map(|path| {
            let path = PathBuf::from(path);
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (name, path)
        })
        .collect();

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let config = DeckConfig::from_env()?;
    let backend = ModelBackend::new(
        output
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string()),
    );

    let presentation = generate_deck(&raw, &images, &config, &backend, &output)?;

    println!("{}", markdown::extract_text_from_presentation(&presentation));
    Ok(())
}
