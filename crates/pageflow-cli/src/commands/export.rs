use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use tracing::warn;

use pageflow_core::templates::{CONFIG_TEMPLATE, DECK_TEMPLATE, README_TEMPLATE};

/// Files written by the starter kit export
const FILES: &[(&str, &str)] = &[
    ("config.toml", CONFIG_TEMPLATE),
    ("deck.toml", DECK_TEMPLATE),
    ("README.md", README_TEMPLATE),
];

pub fn run(dir: &Path, copy: bool) -> Result<()> {
    write_starter_kit(dir)?;
    for (name, _) in FILES {
        println!("wrote {}", dir.join(name).display());
    }

    if copy {
        match copy_to_clipboard(DECK_TEMPLATE) {
            Ok(()) => println!("copied deck.toml to the clipboard"),
            Err(e) => {
                // No retry: surface the notification and move on.
                warn!("clipboard copy failed: {e}");
                println!("clipboard copy failed: {e}");
            }
        }
    }

    Ok(())
}

fn write_starter_kit(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    for (name, content) in FILES {
        let path = dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

/// Copy text to the system clipboard through the OSC 52 escape sequence.
/// Size-capped because many terminals truncate large payloads silently.
fn copy_to_clipboard(text: &str) -> Result<()> {
    const MAX_PAYLOAD: usize = 64 * 1024;
    anyhow::ensure!(text.len() <= MAX_PAYLOAD, "payload too large for OSC 52");

    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    let mut out = io::stdout();
    write!(out, "\x1b]52;c;{encoded}\x07")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_core::Deck;

    #[test]
    fn test_starter_kit_files_written() {
        let dir = std::env::temp_dir().join("pageflow-export-test");
        let _ = std::fs::remove_dir_all(&dir);

        write_starter_kit(&dir).expect("export succeeds");
        for (name, _) in FILES {
            assert!(dir.join(name).exists(), "{name} missing");
        }

        // The exported deck must itself be a loadable deck.
        let deck = Deck::load(&dir.join("deck.toml")).expect("exported deck loads");
        assert_eq!(deck.len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
