use std::path::Path;

use anyhow::Result;

use pageflow_core::Deck;

pub fn run(path: &Path) -> Result<()> {
    let deck = Deck::load(path)?;

    println!("{}: {} sections", path.display(), deck.len());
    for (index, section) in deck.sections.iter().enumerate() {
        if section.tagline.is_empty() {
            println!("  {}. {}", index + 1, section.title);
        } else {
            println!("  {}. {} ({})", index + 1, section.title, section.tagline);
        }
    }

    Ok(())
}
